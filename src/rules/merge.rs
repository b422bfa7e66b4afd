//! Merge resolution.
//!
//! One pass per value, from the ceiling down to 1. Within a value the board
//! is scanned row-major; each unmerged tile looks for an unmerged neighbour
//! of the same value in priority order (up, left, right, down).
//!
//! Every id that takes part in a merge, and every freshly placed merge
//! result, is marked merged and cannot merge again this turn. Scanning high
//! values first means a 4+4 pair always resolves before a 2+2 pair.

use rustc_hash::FxHashSet;

use crate::core::{Board, Coord, GameState, RulesConfig, Tile, TileId};
use crate::events::EngineEvent;

/// A merge result above the ceiling, waiting for the fracture phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingFracture {
    pub at: Coord,
    pub value: u8,
    pub tile_id: TileId,
}

/// Resolve every merge on the board.
///
/// `moved_to` is where the sliding tile landed: a merge that involves that
/// cell is placed there, any other merge lands on the scanned tile's cell.
///
/// Returns overflow fractures in the order they were created.
pub fn resolve_merges(
    config: &RulesConfig,
    state: &mut GameState,
    moved_to: Coord,
    events: &mut Vec<EngineEvent>,
) -> Vec<PendingFracture> {
    let mut merged: FxHashSet<TileId> = FxHashSet::default();
    let mut overflow = Vec::new();

    for value in (1..=config.max_value).rev() {
        for coord in Coord::all() {
            let tile = match state.board.get(coord) {
                Some(tile) if tile.value == value && !merged.contains(&tile.id) => *tile,
                _ => continue,
            };
            let Some(partner_at) = find_partner(&state.board, coord, value, &merged) else {
                continue;
            };
            let Some(partner) = state.board.take(partner_at) else {
                continue;
            };
            state.board.take(coord);
            merged.insert(tile.id);
            merged.insert(partner.id);

            let new_value = value + 1;
            let new_id = state.alloc_tile_id();
            let at = if coord == moved_to || partner_at == moved_to {
                moved_to
            } else {
                coord
            };

            log::trace!("merge {} + {} -> {} ({}) at {}", tile.id, partner.id, new_id, new_value, at);
            events.push(EngineEvent::merge(at, [tile.id, partner.id], new_id, new_value));

            if new_value > config.max_value {
                overflow.push(PendingFracture {
                    at,
                    value: new_value,
                    tile_id: new_id,
                });
            } else {
                state.board.place(at, Tile::new(new_id, new_value));
                merged.insert(new_id);
            }
        }
    }

    overflow
}

/// First same-value, unmerged neighbour in priority order.
fn find_partner(board: &Board, coord: Coord, value: u8, merged: &FxHashSet<TileId>) -> Option<Coord> {
    coord.neighbors().find(|&n| {
        board
            .get(n)
            .is_some_and(|other| other.value == value && !merged.contains(&other.id))
    })
}
