//! Rule set configuration.
//!
//! `RulesConfig` holds the tunable constants of the puzzle:
//! - `max_value`: highest value a tile may hold on the board
//! - `max_strain`: strain cap; reaching it fractures the tile
//! - `strain_gap`: value difference between neighbours that raises strain
//! - `spawn_table`: values the spawn phase may place, with weights
//!
//! `RulesConfig::default()` is the canonical rule set. The board size is a
//! compile-time constant ([`BOARD_SIZE`](super::BOARD_SIZE)) and is not
//! configurable.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::error::EngineError;

/// Canonical value ceiling.
pub const MAX_VALUE: u8 = 5;

/// Canonical strain cap.
pub const MAX_STRAIN: u8 = 3;

/// Canonical neighbour value gap that raises strain.
pub const STRAIN_GAP: u8 = 3;

/// One row of the spawn table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeight {
    /// Value of the spawned tile.
    pub value: u8,
    /// Relative weight. Weights do not need to sum to 1.0.
    pub weight: f64,
}

impl SpawnWeight {
    /// Create a new spawn table row.
    #[must_use]
    pub const fn new(value: u8, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Highest tile value that can stay on the board (default: 5).
    /// Merges producing a larger value fracture immediately.
    pub max_value: u8,

    /// Strain cap (default: 3).
    /// A tile at the cap fractures in the same move.
    pub max_strain: u8,

    /// Neighbour value difference that raises strain on the higher tile
    /// (default: 3).
    pub strain_gap: u8,

    /// Spawn values and weights, drawn in table order
    /// (default: 1 @ 0.5, 2 @ 0.35, 3 @ 0.15).
    pub spawn_table: SmallVec<[SpawnWeight; 4]>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_value: MAX_VALUE,
            max_strain: MAX_STRAIN,
            strain_gap: STRAIN_GAP,
            spawn_table: smallvec![
                SpawnWeight::new(1, 0.5),
                SpawnWeight::new(2, 0.35),
                SpawnWeight::new(3, 0.15),
            ],
        }
    }
}

impl RulesConfig {
    /// Set the value ceiling.
    #[must_use]
    pub fn with_max_value(mut self, max_value: u8) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the strain cap.
    #[must_use]
    pub fn with_max_strain(mut self, max_strain: u8) -> Self {
        self.max_strain = max_strain;
        self
    }

    /// Set the strain gap.
    #[must_use]
    pub fn with_strain_gap(mut self, strain_gap: u8) -> Self {
        self.strain_gap = strain_gap;
        self
    }

    /// Replace the spawn table.
    #[must_use]
    pub fn with_spawn_table(mut self, table: &[SpawnWeight]) -> Self {
        self.spawn_table = SmallVec::from_slice(table);
        self
    }

    /// Weights of the spawn table, in table order.
    #[must_use]
    pub fn spawn_weights(&self) -> SmallVec<[f64; 4]> {
        self.spawn_table.iter().map(|row| row.weight).collect()
    }

    /// Check that the rule set can drive a game.
    ///
    /// ## Rules
    ///
    /// - `max_value` must be at least 2 and below `u8::MAX`, so a merge
    ///   result always fits
    /// - `max_strain` must be at least 1
    /// - `strain_gap` must be at least 1, so a strained tile is always
    ///   worth at least 2 and its fracture spawns never drop below 1
    /// - the spawn table must be non-empty, with finite non-negative
    ///   weights, a positive total, and values in `1..=max_value`
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_value < 2 || self.max_value == u8::MAX {
            return Err(EngineError::InvalidConfig(format!(
                "max_value must be in 2..{}, got {}",
                u8::MAX,
                self.max_value
            )));
        }
        if self.max_strain == 0 {
            return Err(EngineError::InvalidConfig("max_strain must be at least 1".to_string()));
        }
        if self.strain_gap == 0 {
            return Err(EngineError::InvalidConfig("strain_gap must be at least 1".to_string()));
        }
        if self.spawn_table.is_empty() {
            return Err(EngineError::InvalidConfig("spawn_table is empty".to_string()));
        }

        let mut total = 0.0;
        for (i, row) in self.spawn_table.iter().enumerate() {
            if !row.weight.is_finite() || row.weight < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "spawn_table[{}] has invalid weight {}",
                    i, row.weight
                )));
            }
            if row.value == 0 || row.value > self.max_value {
                return Err(EngineError::InvalidConfig(format!(
                    "spawn_table[{}] value {} is outside 1..={}",
                    i, row.value, self.max_value
                )));
            }
            total += row.weight;
        }
        if total <= 0.0 {
            return Err(EngineError::InvalidConfig("spawn_table weights sum to zero".to_string()));
        }

        Ok(())
    }
}
