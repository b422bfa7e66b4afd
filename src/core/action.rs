//! Player moves.
//!
//! A move is a source cell plus a slide direction. Nothing about a `Move`
//! is validated at construction; the engine decides whether it is legal
//! and reports `blocked` if not.
//!
//! ```
//! use numberclart::core::{Coord, Direction, Move};
//!
//! let mv = Move::new(Coord::new(0, 1), Direction::Right);
//! assert_eq!(mv.target(), Coord::new(0, 2));
//! assert_eq!(mv.to_string(), "(0, 1) right");
//! ```

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Direction};

/// Slide the tile at `from` one cell towards `dir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub dir: Direction,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Coord, dir: Direction) -> Self {
        Self { from, dir }
    }

    /// Shorthand for `Move::new(Coord::new(row, col), dir)`.
    #[must_use]
    pub const fn at(row: i32, col: i32, dir: Direction) -> Self {
        Self::new(Coord::new(row, col), dir)
    }

    /// The destination cell. May be off the board.
    #[must_use]
    pub const fn target(self) -> Coord {
        self.from.step(self.dir)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        assert_eq!(Move::at(4, 4, Direction::Left).target(), Coord::new(4, 3));
        assert!(!Move::at(0, 0, Direction::Up).target().in_bounds());
    }

    #[test]
    fn test_serialization() {
        let mv = Move::at(2, 3, Direction::Down);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":{"row":2,"col":3},"dir":"down"}"#);
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
