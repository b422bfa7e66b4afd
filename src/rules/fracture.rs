//! Fracture resolution.
//!
//! Two kinds of tile fracture: merge results above the value ceiling
//! (queued by the merge phase, never placed) and board tiles whose strain
//! has reached the maximum. Overflow fractures resolve first, then strain
//! fractures, each in row-major order.
//!
//! A fracture removes its tile and places up to two tiles one value lower
//! into empty neighbours, in priority order. With a single empty neighbour
//! only one tile is placed. With none, one tile is placed on the fractured
//! cell itself.

use smallvec::{smallvec, SmallVec};

use super::merge::PendingFracture;
use crate::core::{Coord, GameState, RulesConfig, Tile};
use crate::events::{EngineEvent, FractureSpawn, FractureSpawns};

/// Resolve overflow fractures, then strain fractures.
///
/// The strain queue is captured before anything fractures, so tiles placed
/// by a fracture never fracture in the same turn.
pub fn resolve_fractures(
    config: &RulesConfig,
    state: &mut GameState,
    mut overflow: Vec<PendingFracture>,
    events: &mut Vec<EngineEvent>,
) {
    overflow.sort_by_key(|pending| pending.at);

    let strained: Vec<PendingFracture> = state
        .board
        .tiles()
        .filter(|(_, tile)| tile.strain >= config.max_strain)
        .map(|(at, tile)| PendingFracture {
            at,
            value: tile.value,
            tile_id: tile.id,
        })
        .collect();

    for pending in overflow.into_iter().chain(strained) {
        fracture(state, pending, events);
    }
}

fn fracture(state: &mut GameState, pending: PendingFracture, events: &mut Vec<EngineEvent>) {
    // An earlier fracture may already have replaced this cell
    if state.board.get(pending.at).is_some_and(|tile| tile.id == pending.tile_id) {
        state.board.take(pending.at);
    }

    let empties: SmallVec<[Coord; 4]> = pending
        .at
        .neighbors()
        .filter(|&n| state.board.is_vacant(n))
        .collect();
    let targets: SmallVec<[Coord; 2]> = match empties.as_slice() {
        [] => smallvec![pending.at],
        [only] => smallvec![*only],
        [first, second, ..] => smallvec![*first, *second],
    };

    let mut spawns = FractureSpawns::new();
    if pending.value > 1 {
        let value = pending.value - 1;
        for at in targets {
            let tile_id = state.alloc_tile_id();
            state.board.place(at, Tile::new(tile_id, value));
            spawns.push(FractureSpawn { at, tile_id, value });
        }
    } else {
        log::warn!(
            "fracture of {} at {} has value {}; nothing to spawn",
            pending.tile_id,
            pending.at,
            pending.value
        );
    }

    log::trace!("fracture {} at {} into {} tiles", pending.tile_id, pending.at, spawns.len());
    events.push(EngineEvent::fracture(pending.at, pending.tile_id, spawns));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn state_with(tiles: &[((i32, i32), u32, u8, u8)]) -> GameState {
        GameState::from_tiles(
            1,
            tiles.iter().map(|&((r, c), id, value, strain)| {
                (Coord::new(r, c), Tile::new(TileId(id), value).with_strain(strain))
            }),
        )
    }

    fn spawn_coords(event: &EngineEvent) -> Vec<Coord> {
        match event {
            EngineEvent::Fracture { spawns, .. } => spawns.iter().map(|s| s.at).collect(),
            other => panic!("expected fracture, got {other:?}"),
        }
    }

    #[test]
    fn test_strain_fracture_two_empties() {
        let mut state = state_with(&[((2, 2), 1, 4, 3)]);
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, Vec::new(), &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(spawn_coords(&events[0]), vec![Coord::new(1, 2), Coord::new(2, 1)]);
        assert!(state.board.get(Coord::new(2, 2)).is_none());
        for at in [Coord::new(1, 2), Coord::new(2, 1)] {
            let tile = state.board.get(at).copied();
            assert_eq!(tile.map(|t| (t.value, t.strain)), Some((3, 0)));
        }
    }

    #[test]
    fn test_strain_fracture_one_empty() {
        let mut state = state_with(&[
            ((2, 2), 1, 4, 3),
            ((1, 2), 2, 1, 0),
            ((2, 1), 3, 1, 0),
            ((2, 3), 4, 1, 0),
        ]);
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, Vec::new(), &mut events);

        assert_eq!(spawn_coords(&events[0]), vec![Coord::new(3, 2)]);
        assert!(state.board.get(Coord::new(2, 2)).is_none());
    }

    #[test]
    fn test_strain_fracture_no_empties() {
        let mut state = state_with(&[
            ((2, 2), 1, 4, 3),
            ((1, 2), 2, 1, 0),
            ((2, 1), 3, 1, 0),
            ((2, 3), 4, 1, 0),
            ((3, 2), 5, 1, 0),
        ]);
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, Vec::new(), &mut events);

        assert_eq!(spawn_coords(&events[0]), vec![Coord::new(2, 2)]);
        let tile = state.board.get(Coord::new(2, 2)).copied();
        assert_eq!(tile.map(|t| (t.id, t.value, t.strain)), Some((TileId(6), 3, 0)));
    }

    #[test]
    fn test_overflow_before_strain() {
        let mut state = state_with(&[((0, 0), 1, 3, 3)]);
        let overflow = vec![PendingFracture {
            at: Coord::new(4, 4),
            value: 6,
            tile_id: TileId(7),
        }];
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, overflow, &mut events);

        let ids: Vec<_> = events
            .iter()
            .map(|e| match e {
                EngineEvent::Fracture { tile_id, .. } => *tile_id,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec![TileId(7), TileId(1)]);
        // Corner overflow: up and left are the only neighbours
        assert_eq!(spawn_coords(&events[0]), vec![Coord::new(3, 4), Coord::new(4, 3)]);
    }

    #[test]
    fn test_overflow_sorted_row_major() {
        let mut state = state_with(&[]);
        let overflow = vec![
            PendingFracture { at: Coord::new(3, 0), value: 6, tile_id: TileId(20) },
            PendingFracture { at: Coord::new(0, 3), value: 6, tile_id: TileId(21) },
        ];
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, overflow, &mut events);

        let coords: Vec<_> = events.iter().filter_map(EngineEvent::at).collect();
        assert_eq!(coords, vec![Coord::new(0, 3), Coord::new(3, 0)]);
    }

    #[test]
    fn test_spawned_tiles_do_not_fracture() {
        let config = RulesConfig::default();
        let mut state = state_with(&[((2, 2), 1, 4, 3)]);
        let mut events = Vec::new();

        resolve_fractures(&config, &mut state, Vec::new(), &mut events);

        assert_eq!(events.len(), 1);
        assert!(state.board.tiles().all(|(_, t)| t.strain == 0));
    }

    #[test]
    fn test_value_one_fracture_spawns_nothing() {
        let mut state = state_with(&[((1, 1), 1, 1, 3)]);
        let mut events = Vec::new();

        resolve_fractures(&RulesConfig::default(), &mut state, Vec::new(), &mut events);

        assert_eq!(events, vec![EngineEvent::fracture(Coord::new(1, 1), TileId(1), FractureSpawns::new())]);
        assert_eq!(state.board.tile_count(), 0);
    }
}
