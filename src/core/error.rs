//! Engine error type.
//!
//! Move resolution itself never fails: illegal moves are reported as
//! `blocked` events. Errors only come from the edges of the crate:
//! building a rule set, parsing direction tokens and decoding snapshots.

use serde::{Deserialize, Serialize};

/// Errors raised outside the move-resolution path.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// A rule set failed validation.
    #[error("Invalid rules config: {0}")]
    InvalidConfig(String),

    /// A direction token was not one of `up`, `down`, `left`, `right`.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    /// A tile id token was not of the form `t<n>`.
    #[error("Invalid tile id: {0}")]
    InvalidTileId(String),

    /// A state snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
