//! Strain accrual.
//!
//! Every orthogonally adjacent pair whose values differ by at least the
//! strain gap adds one point of strain to its higher tile. A tile touching
//! several low neighbours collects one point per pair, capped at the
//! maximum. Intents are gathered first and applied in row-major order so the
//! board is read in a single consistent snapshot.

use rustc_hash::FxHashMap;

use crate::core::{Board, Coord, Direction, RulesConfig, TileId};
use crate::events::EngineEvent;

#[derive(Clone, Copy, Debug)]
struct StrainIntent {
    at: Coord,
    increment: u8,
}

/// Accrue strain across the board and emit one event per tile that rose.
pub fn accrue_strain(config: &RulesConfig, board: &mut Board, events: &mut Vec<EngineEvent>) {
    let mut intents: FxHashMap<TileId, StrainIntent> = FxHashMap::default();

    for (coord, tile) in board.tiles() {
        // Right and down cover every unordered pair exactly once
        for dir in [Direction::Right, Direction::Down] {
            let Some(other) = board.get(coord.step(dir)) else {
                continue;
            };
            if tile.value.abs_diff(other.value) < config.strain_gap {
                continue;
            }
            let (high_at, high_id) = if tile.value > other.value {
                (coord, tile.id)
            } else {
                (coord.step(dir), other.id)
            };
            let intent = intents
                .entry(high_id)
                .or_insert(StrainIntent { at: high_at, increment: 0 });
            intent.increment = intent.increment.saturating_add(1);
        }
    }

    let mut ordered: Vec<StrainIntent> = intents.into_values().collect();
    ordered.sort_by_key(|intent| intent.at);

    for intent in ordered {
        let Some(tile) = board.get_mut(intent.at) else {
            continue;
        };
        let before = tile.strain;
        let after = before.saturating_add(intent.increment).min(config.max_strain);
        if after > before {
            tile.strain = after;
            log::trace!("strain {} at {} -> {}", tile.id, intent.at, after);
            events.push(EngineEvent::strain(intent.at, tile.id, after));
        }
    }
}

/// Lower every tile's strain by one, never below zero. Emits nothing.
pub fn decay_strain(board: &mut Board) {
    for tile in board.tiles_mut() {
        tile.strain = tile.strain.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId};

    fn board_with(tiles: &[((i32, i32), u32, u8, u8)]) -> Board {
        Board::from_tiles(tiles.iter().map(|&((r, c), id, value, strain)| {
            (Coord::new(r, c), Tile::new(TileId(id), value).with_strain(strain))
        }))
    }

    #[test]
    fn test_gap_strains_higher_tile() {
        let mut board = board_with(&[((0, 0), 1, 5, 0), ((0, 1), 2, 1, 0)]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        assert_eq!(events, vec![EngineEvent::strain(Coord::new(0, 0), TileId(1), 1)]);
        assert_eq!(board.get(Coord::new(0, 1)).map(|t| t.strain), Some(0));
    }

    #[test]
    fn test_small_gap_is_ignored() {
        let mut board = board_with(&[((0, 0), 1, 3, 0), ((1, 0), 2, 1, 0)]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        assert!(events.is_empty());
    }

    #[test]
    fn test_multiple_pairs_accumulate() {
        // A 5 with low tiles on three sides
        let mut board = board_with(&[
            ((1, 1), 1, 5, 0),
            ((0, 1), 2, 1, 0),
            ((1, 0), 3, 2, 0),
            ((1, 2), 4, 1, 0),
        ]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        assert_eq!(events, vec![EngineEvent::strain(Coord::new(1, 1), TileId(1), 3)]);
    }

    #[test]
    fn test_strain_is_capped() {
        let mut board = board_with(&[((1, 1), 1, 5, 2), ((0, 1), 2, 1, 0), ((1, 2), 3, 1, 0)]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        assert_eq!(events, vec![EngineEvent::strain(Coord::new(1, 1), TileId(1), 3)]);
    }

    #[test]
    fn test_no_event_at_cap() {
        let mut board = board_with(&[((0, 0), 1, 5, 3), ((0, 1), 2, 1, 0)]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        assert!(events.is_empty());
        assert_eq!(board.get(Coord::new(0, 0)).map(|t| t.strain), Some(3));
    }

    #[test]
    fn test_events_are_row_major() {
        let mut board = board_with(&[
            ((3, 3), 1, 4, 0),
            ((3, 4), 2, 1, 0),
            ((0, 4), 3, 1, 0),
            ((1, 4), 4, 5, 0),
        ]);
        let mut events = Vec::new();

        accrue_strain(&RulesConfig::default(), &mut board, &mut events);

        let coords: Vec<_> = events.iter().filter_map(EngineEvent::at).collect();
        assert_eq!(coords, vec![Coord::new(1, 4), Coord::new(3, 3)]);
    }

    #[test]
    fn test_decay_saturates() {
        let mut board = board_with(&[((0, 0), 1, 2, 2), ((4, 4), 2, 1, 0)]);

        decay_strain(&mut board);

        assert_eq!(board.get(Coord::new(0, 0)).map(|t| t.strain), Some(1));
        assert_eq!(board.get(Coord::new(4, 4)).map(|t| t.strain), Some(0));
    }
}
