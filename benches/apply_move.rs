use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numberclart::{Coord, Direction, Engine, GameState, Move, Tile, TileId};

fn bench_first_move(c: &mut Criterion) {
    let engine = Engine::default();
    let state = engine.create_game(Some(12345));
    let mv = engine.legal_moves(&state)[0];

    c.bench_function("apply_first_move", |b| {
        b.iter(|| engine.apply_move(black_box(&state), black_box(mv)))
    });
}

fn bench_crowded_board(c: &mut Criterion) {
    // Nearly full board with a cascade of merges and strain
    let engine = Engine::default();
    let tiles = Coord::all()
        .filter(|&at| at != Coord::new(4, 4))
        .zip(1u32..)
        .map(|(at, id)| (at, Tile::new(TileId(id), ((at.row * 2 + at.col) % 5 + 1) as u8)));
    let state = GameState::from_tiles(7, tiles);
    let mv = Move::at(4, 3, Direction::Right);

    c.bench_function("apply_crowded_move", |b| {
        b.iter(|| engine.apply_move(black_box(&state), black_box(mv)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let engine = Engine::default();
    let state = engine.create_game(Some(12345));

    c.bench_function("legal_moves", |b| b.iter(|| engine.legal_moves(black_box(&state))));
}

fn bench_random_game(c: &mut Criterion) {
    let engine = Engine::default();

    c.bench_function("play_100_turns", |b| {
        b.iter(|| {
            let mut state = engine.create_game(Some(99));
            for _ in 0..100 {
                let Some(&mv) = engine.legal_moves(&state).first() else {
                    break;
                };
                state = engine.apply_move(&state, mv).state;
            }
            black_box(state)
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = Engine::default().create_game(Some(12345));

    c.bench_function("state_to_bytes", |b| b.iter(|| black_box(&state).to_bytes()));
}

criterion_group!(
    benches,
    bench_first_move,
    bench_crowded_board,
    bench_legal_moves,
    bench_random_game,
    bench_snapshot
);
criterion_main!(benches);
