//! Core engine types: coordinates, tiles, board, state, moves, RNG, configuration.
//!
//! These are plain values with no behaviour beyond bookkeeping. The turn
//! logic that transforms them lives in [`crate::rules`].

pub mod action;
pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;
pub mod state;
pub mod tile;

pub use action::Move;
pub use board::Board;
pub use config::{RulesConfig, SpawnWeight, MAX_STRAIN, MAX_VALUE, STRAIN_GAP};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use error::EngineError;
pub use rng::GameRng;
pub use state::{GameState, DEFAULT_SEED};
pub use tile::{Tile, TileId};
