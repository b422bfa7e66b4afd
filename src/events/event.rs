//! Engine event types.
//!
//! Events narrate every observable sub-effect of a move, in the order the
//! engine applied them. A renderer can replay a turn by walking the list.
//!
//! ## Design
//!
//! The variant set is closed. Consumers `match` on [`EngineEvent`]
//! exhaustively, so adding a variant is a breaking change by construction.
//!
//! ## Wire format
//!
//! Events serialize as internally tagged objects:
//!
//! ```
//! use numberclart::core::{Coord, TileId};
//! use numberclart::events::EngineEvent;
//!
//! let event = EngineEvent::spawn(Coord::new(2, 2), TileId(3), 1);
//! let json = serde_json::to_string(&event).unwrap();
//! assert_eq!(json, r#"{"type":"spawn","at":{"row":2,"col":2},"tile_id":"t3","value":1}"#);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Direction, TileId};

/// A tile created by a fracture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FractureSpawn {
    pub at: Coord,
    pub tile_id: TileId,
    pub value: u8,
}

/// Tiles created by one fracture. Never more than two.
pub type FractureSpawns = SmallVec<[FractureSpawn; 2]>;

/// One sub-effect of a move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EngineEvent {
    /// A tile slid from `from` to `to`.
    Move { from: Coord, to: Coord, tile_id: TileId },

    /// The requested move was illegal. The state is unchanged.
    Blocked { from: Coord, dir: Direction },

    /// Two tiles merged into `new_id` with `value`.
    ///
    /// If `value` exceeds the ceiling the new tile never lands on the board
    /// and a `Fracture` with the same id follows.
    Merge {
        at: Coord,
        from_ids: [TileId; 2],
        new_id: TileId,
        value: u8,
    },

    /// A tile's strain rose to `new_strain`.
    Strain { at: Coord, tile_id: TileId, new_strain: u8 },

    /// A tile fractured into `spawns`.
    Fracture {
        at: Coord,
        tile_id: TileId,
        spawns: FractureSpawns,
    },

    /// The spawn phase placed a new tile.
    Spawn { at: Coord, tile_id: TileId, value: u8 },

    /// The game is over.
    End,
}

/// Discriminant of an [`EngineEvent`], for filtering and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Move,
    Blocked,
    Merge,
    Strain,
    Fracture,
    Spawn,
    End,
}

impl EventKind {
    /// The wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Move => "move",
            EventKind::Blocked => "blocked",
            EventKind::Merge => "merge",
            EventKind::Strain => "strain",
            EventKind::Fracture => "fracture",
            EventKind::Spawn => "spawn",
            EventKind::End => "end",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constructors for each variant.
impl EngineEvent {
    /// Create a move event.
    pub fn moved(from: Coord, to: Coord, tile_id: TileId) -> Self {
        Self::Move { from, to, tile_id }
    }

    /// Create a blocked event.
    pub fn blocked(from: Coord, dir: Direction) -> Self {
        Self::Blocked { from, dir }
    }

    /// Create a merge event.
    pub fn merge(at: Coord, from_ids: [TileId; 2], new_id: TileId, value: u8) -> Self {
        Self::Merge {
            at,
            from_ids,
            new_id,
            value,
        }
    }

    /// Create a strain event.
    pub fn strain(at: Coord, tile_id: TileId, new_strain: u8) -> Self {
        Self::Strain { at, tile_id, new_strain }
    }

    /// Create a fracture event.
    pub fn fracture(at: Coord, tile_id: TileId, spawns: FractureSpawns) -> Self {
        Self::Fracture { at, tile_id, spawns }
    }

    /// Create a spawn event.
    pub fn spawn(at: Coord, tile_id: TileId, value: u8) -> Self {
        Self::Spawn { at, tile_id, value }
    }
}

impl EngineEvent {
    /// The kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            EngineEvent::Move { .. } => EventKind::Move,
            EngineEvent::Blocked { .. } => EventKind::Blocked,
            EngineEvent::Merge { .. } => EventKind::Merge,
            EngineEvent::Strain { .. } => EventKind::Strain,
            EngineEvent::Fracture { .. } => EventKind::Fracture,
            EngineEvent::Spawn { .. } => EventKind::Spawn,
            EngineEvent::End => EventKind::End,
        }
    }

    /// The cell this event happened at, if it has one.
    ///
    /// For `Move` this is the destination.
    #[must_use]
    pub const fn at(&self) -> Option<Coord> {
        match self {
            EngineEvent::Move { to, .. } => Some(*to),
            EngineEvent::Blocked { from, .. } => Some(*from),
            EngineEvent::Merge { at, .. }
            | EngineEvent::Strain { at, .. }
            | EngineEvent::Fracture { at, .. }
            | EngineEvent::Spawn { at, .. } => Some(*at),
            EngineEvent::End => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_kinds() {
        let c = Coord::new(0, 0);
        let events = [
            EngineEvent::moved(c, Coord::new(0, 1), TileId(1)),
            EngineEvent::blocked(c, Direction::Up),
            EngineEvent::merge(c, [TileId(1), TileId(2)], TileId(3), 2),
            EngineEvent::strain(c, TileId(1), 1),
            EngineEvent::fracture(c, TileId(1), FractureSpawns::new()),
            EngineEvent::spawn(c, TileId(1), 1),
            EngineEvent::End,
        ];
        let kinds: Vec<_> = events.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(
            kinds,
            vec!["move", "blocked", "merge", "strain", "fracture", "spawn", "end"]
        );
    }

    #[test]
    fn test_at() {
        let moved = EngineEvent::moved(Coord::new(1, 1), Coord::new(1, 2), TileId(1));
        assert_eq!(moved.at(), Some(Coord::new(1, 2)));
        assert_eq!(EngineEvent::End.at(), None);
    }

    #[test]
    fn test_merge_wire_shape() {
        let event = EngineEvent::merge(Coord::new(0, 2), [TileId(1), TileId(2)], TileId(3), 3);
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "merge");
        assert_eq!(json["from_ids"], serde_json::json!(["t1", "t2"]));
        assert_eq!(json["new_id"], "t3");
        assert_eq!(json["value"], 3);
    }

    #[test]
    fn test_end_wire_shape() {
        let json = serde_json::to_string(&EngineEvent::End).unwrap();
        assert_eq!(json, r#"{"type":"end"}"#);
    }

    #[test]
    fn test_event_serialization() {
        let event = EngineEvent::fracture(
            Coord::new(2, 2),
            TileId(9),
            smallvec![
                FractureSpawn { at: Coord::new(1, 2), tile_id: TileId(10), value: 5 },
                FractureSpawn { at: Coord::new(2, 1), tile_id: TileId(11), value: 5 },
            ],
        );
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
