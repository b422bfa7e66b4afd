//! Event model.
//!
//! Every call to `apply_move` returns an ordered list of [`EngineEvent`]s.
//! Within one move the order is always:
//!
//! 1. `move` (or a single `blocked`, and nothing else)
//! 2. `merge`, highest values first
//! 3. `strain`, row-major
//! 4. `fracture`, overflow fractures then strain fractures, each row-major
//! 5. `spawn` (absent on a full board)
//! 6. `end` (only on the move that ends the game)

pub mod event;

pub use event::{EngineEvent, EventKind, FractureSpawn, FractureSpawns};
