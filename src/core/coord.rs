//! Grid coordinates and slide directions.
//!
//! ## Coord
//!
//! A `(row, col)` pair. Components are signed so that a malformed move
//! request (for example `(-1, 7)`) can still be carried through to a
//! `blocked` event instead of being rejected at construction.
//!
//! ## Direction
//!
//! The four slide directions. Neighbour scans throughout the engine use
//! [`Direction::PRIORITY`] (up, left, right, down), which is what makes
//! merge and fracture placement reproducible.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// A cell position on the board.
///
/// Ordering is row-major: `(0, 4) < (1, 0)`. Strain and fracture queues
/// rely on this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Is this coordinate inside the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i32 && self.col >= 0 && self.col < BOARD_SIZE as i32
    }

    /// Array indices for this coordinate, or `None` if off the board.
    #[must_use]
    pub fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// The coordinate one step in `dir`. May be off the board.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// In-bounds neighbours in [`Direction::PRIORITY`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::PRIORITY
            .into_iter()
            .map(move |dir| self.step(dir))
            .filter(|c| c.in_bounds())
    }

    /// Iterate over every board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32).flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// A slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Neighbour scan order used by merges, fractures and legal-move listing.
    pub const PRIORITY: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Right, Direction::Down];

    /// Unit `(row, col)` delta.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The wire token for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(EngineError::UnknownDirection(other.to_string())),
        }
    }
}
