//! Random tile spawning.

use crate::core::{GameState, RulesConfig, Tile};
use crate::events::EngineEvent;

/// Place one random tile on an empty cell.
///
/// Draws twice from the state's RNG: first the value from the weighted
/// spawn table, then the cell from the row-major list of empty cells.
/// On a full board nothing is drawn and `None` is returned.
pub fn spawn_tile(config: &RulesConfig, state: &mut GameState) -> Option<EngineEvent> {
    let empties = state.board.empty_cells();
    if empties.is_empty() {
        return None;
    }

    let mut rng = state.rng();
    let index = rng.weighted_index(&config.spawn_weights())?;
    let value = config.spawn_table[index].value;
    let at = empties[rng.gen_index(empties.len())];
    state.rng_state = rng.state();

    let tile_id = state.alloc_tile_id();
    state.board.place(at, Tile::new(tile_id, value));
    log::trace!("spawn {} ({}) at {}", tile_id, value, at);
    Some(EngineEvent::spawn(at, tile_id, value))
}
