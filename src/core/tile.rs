//! Tile identity and tile values.
//!
//! Every tile placed on the board carries a [`TileId`] minted from the
//! state's counter. Identity is separate from value: a merge destroys two
//! ids and mints a new one, a fracture destroys one and mints one or two.
//!
//! ```
//! use numberclart::core::TileId;
//!
//! let id = TileId::new(7);
//! assert_eq!(id.to_string(), "t7");
//! assert_eq!(id.next(), TileId::new(8));
//! assert_eq!("t7".parse::<TileId>(), Ok(id));
//! ```
//!
//! On the wire an id is its `t<n>` token.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// Unique identifier for a tile within one game lineage.
///
/// Ids are not reused: the counter in `GameState` only moves forward and
/// stops at `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id that follows this one. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl FromStr for TileId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('t')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| EngineError::InvalidTileId(s.to_string()))
    }
}

impl From<TileId> for String {
    fn from(id: TileId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = EngineError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

/// A numbered tile.
///
/// `value` is at least 1 for every tile on the board. `strain` stays within
/// `[0, max_strain]` of the active rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: u8,
    pub strain: u8,
}

impl Tile {
    /// Create a fresh tile with no strain.
    #[must_use]
    pub const fn new(id: TileId, value: u8) -> Self {
        Self { id, value, strain: 0 }
    }

    /// Set the strain (builder pattern).
    #[must_use]
    pub const fn with_strain(mut self, strain: u8) -> Self {
        self.strain = strain;
        self
    }
}
