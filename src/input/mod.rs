//! Input translation.
//!
//! Turns raw device input into a single [`Direction`](crate::core::Direction).
//! Pairing the direction with a source cell, and checking that the game
//! still accepts input, is the caller's job.

pub mod keys;
pub mod swipe;

pub use keys::direction_for_key;
pub use swipe::{SwipeTracker, SWIPE_THRESHOLD};
