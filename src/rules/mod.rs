//! Turn resolution.
//!
//! [`Engine`] drives a move through the phase modules in a fixed order.
//! Each phase is a free function over the state being built, so the order
//! of side effects is visible in one place: [`Engine::apply_move`].

pub mod engine;
pub mod fracture;
pub mod legal;
pub mod merge;
pub mod spawn;
pub mod strain;

pub use engine::{Engine, MoveOutcome};
pub use legal::{can_move_from, is_playable, is_terminal, legal_moves};
pub use merge::PendingFracture;
