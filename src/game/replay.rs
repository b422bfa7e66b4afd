//! Rebuilding a game from its seed and moves.

use super::session::{Game, GameBuilder};
use crate::core::{EngineError, Move, RulesConfig};

/// Replay `moves` from a fresh game with `seed`.
///
/// Blocked moves are applied too; they change nothing, exactly as they did
/// the first time.
pub fn replay(
    config: RulesConfig,
    seed: u32,
    moves: impl IntoIterator<Item = Move>,
) -> Result<Game, EngineError> {
    let mut game = GameBuilder::new().seed(seed).rules(config).build()?;
    for mv in moves {
        game.play(mv);
    }
    log::debug!("replayed seed={} to turn {}", seed, game.turn_count());
    Ok(game)
}
