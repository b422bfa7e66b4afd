//! Game sessions built on the engine.
//!
//! [`Game`] keeps the current state and a persistent history of accepted
//! moves. [`replay`] rebuilds a session from a seed and a move list.

pub mod replay;
pub mod session;

pub use replay::replay;
pub use session::{Game, GameBuilder, TurnRecord};
