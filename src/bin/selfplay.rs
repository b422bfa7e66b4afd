//! Random self-play.
//!
//! Usage: `numberclart-selfplay [SEED] [MAX_TURNS]`
//!
//! Plays one game with a uniformly random policy and logs a summary. Set
//! `RUST_LOG=debug` to see every turn.

use std::process::ExitCode;

use rand::{Rng, SeedableRng};

use numberclart::events::EventKind;
use numberclart::{EngineEvent, GameBuilder, GameRng, DEFAULT_SEED};

const DEFAULT_MAX_TURNS: u32 = 10_000;

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, name: &str) -> Result<T, String> {
    match arg {
        Some(raw) => raw.parse().map_err(|_| format!("invalid {name}: {raw}")),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let parsed = parse_arg(args.next(), DEFAULT_SEED, "seed")
        .and_then(|seed| Ok((seed, parse_arg(args.next(), DEFAULT_MAX_TURNS, "max turns")?)));
    let (seed, max_turns) = match parsed {
        Ok(values) => values,
        Err(message) => {
            log::error!("{message}");
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = match GameBuilder::new().seed(seed).build() {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // The policy has its own stream so it never perturbs the game's RNG
    let mut policy = GameRng::seed_from_u64(u64::from(seed) ^ 0x5eed);
    let mut merges = 0usize;
    let mut fractures = 0usize;

    while !game.is_over() && game.turn_count() < max_turns {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[policy.gen_range(0..moves.len())];
        for event in game.play(mv) {
            match event.kind() {
                EventKind::Merge => merges += 1,
                EventKind::Fracture => fractures += 1,
                _ => {}
            }
            if let EngineEvent::End = event {
                log::info!("game over on turn {}", game.turn_count());
            }
        }
    }

    let best = game.state().board.tiles().map(|(_, tile)| tile.value).max().unwrap_or(0);
    log::info!(
        "seed={} turns={} merges={} fractures={} best={} over={}",
        seed,
        game.turn_count(),
        merges,
        fractures,
        best,
        game.is_over()
    );
    println!("{}", game.state().board);
    println!(
        "turns={} merges={} fractures={} best={}",
        game.turn_count(),
        merges,
        fractures,
        best
    );
    ExitCode::SUCCESS
}
