//! # numberclart
//!
//! A deterministic rules engine for a 5x5 tile-merging puzzle with strain
//! and fracture.
//!
//! ## Design Principles
//!
//! 1. **Pure Turns**: `apply_move` takes a state and returns a new one plus
//!    the events that describe the turn. The caller's state is never mutated.
//!
//! 2. **Explicit Randomness**: The RNG is a plain `u32` inside
//!    [`GameState`]. The same seed and moves always produce the same game.
//!
//! 3. **Events Over Diffs**: Every sub-effect of a move (slide, merge,
//!    strain, fracture, spawn, end) is reported in the order it happened, so
//!    a renderer can animate a turn without inspecting the board.
//!
//! ## Rules In Brief
//!
//! A move slides one tile one cell into an empty neighbour. Equal
//! neighbours then merge into a tile one value higher; a merge past the
//! ceiling fractures instead. Tiles next to much smaller tiles build strain
//! and fracture when it peaks. Each turn ends with a random spawn. The game
//! is over when nothing can slide and nothing can merge.
//!
//! ```
//! use numberclart::{apply_move, create_game, legal_moves};
//!
//! let state = create_game(Some(1));
//! let mv = legal_moves(&state)[0];
//! let outcome = apply_move(&state, mv);
//! assert_eq!(outcome.state.turn_count, 1);
//! assert_eq!(state.turn_count, 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Coordinates, tiles, board, state, moves, RNG, configuration
//! - `events`: The event model
//! - `rules`: Turn resolution and legal-move queries
//! - `game`: Sessions with history, and replay
//! - `input`: Key and swipe translation to directions

pub mod core;
pub mod events;
pub mod game;
pub mod input;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, Direction, EngineError, GameRng, GameState, Move, RulesConfig, SpawnWeight,
    Tile, TileId, BOARD_SIZE, DEFAULT_SEED,
};

pub use crate::events::{EngineEvent, EventKind, FractureSpawn};

pub use crate::rules::{Engine, MoveOutcome};

pub use crate::game::{replay, Game, GameBuilder, TurnRecord};

/// Start a game with the standard rules. `None` uses [`DEFAULT_SEED`].
#[must_use]
pub fn create_game(seed: Option<u32>) -> GameState {
    Engine::default().create_game(seed)
}

/// Resolve one move with the standard rules.
#[must_use]
pub fn apply_move(state: &GameState, mv: Move) -> MoveOutcome {
    Engine::default().apply_move(state, mv)
}

/// Playable moves for `state`.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    rules::legal_moves(state)
}
