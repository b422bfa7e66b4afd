//! Game state.
//!
//! ## GameState
//!
//! Everything a move needs, as one plain value:
//! - The board
//! - Turn counter and game-over flag
//! - RNG state (a `u32`, see [`GameRng`])
//! - Next tile id counter
//!
//! The engine takes `&GameState` and returns a fresh state. The caller's
//! value is never mutated, so keeping an old state around for comparison or
//! replay is always safe.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::Coord;
use super::error::EngineError;
use super::rng::GameRng;
use super::tile::{Tile, TileId};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u32 = 1;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The tile grid.
    pub board: Board,

    /// Completed (non-blocked) moves.
    pub turn_count: u32,

    /// Set once no slide and no merge remains.
    pub game_over: bool,

    /// Spawn RNG state, threaded through every move.
    pub rng_state: u32,

    /// Next tile id to mint. Only ever increases.
    pub next_tile_id: u32,
}

impl GameState {
    /// Create a new game state with an empty board.
    ///
    /// ## Defaults
    ///
    /// - `turn_count`: 0
    /// - `game_over`: false
    /// - `next_tile_id`: 1
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            turn_count: 0,
            game_over: false,
            rng_state: seed,
            next_tile_id: 1,
        }
    }

    /// Create a state from explicit tile placements.
    ///
    /// `next_tile_id` is set past the highest placed id so newly minted
    /// tiles can never collide with the fixture.
    #[must_use]
    pub fn from_tiles(seed: u32, placements: impl IntoIterator<Item = (Coord, Tile)>) -> Self {
        let board = Board::from_tiles(placements);
        let next_tile_id = board.tiles().map(|(_, t)| t.id.raw()).max().map_or(1, |max| max.saturating_add(1));
        Self {
            next_tile_id,
            ..Self::new(seed).with_board(board)
        }
    }

    /// Replace the board (builder pattern).
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Set the id counter (builder pattern).
    #[must_use]
    pub fn with_next_tile_id(mut self, next_tile_id: u32) -> Self {
        self.next_tile_id = next_tile_id;
        self
    }

    /// Set the RNG state (builder pattern).
    #[must_use]
    pub fn with_rng_state(mut self, rng_state: u32) -> Self {
        self.rng_state = rng_state;
        self
    }

    /// Allocate a new tile id.
    ///
    /// The counter stops at `u32::MAX`; past that point the last id is
    /// handed out again.
    pub fn alloc_tile_id(&mut self) -> TileId {
        let id = TileId(self.next_tile_id);
        match self.next_tile_id.checked_add(1) {
            Some(next) => self.next_tile_id = next,
            None => log::warn!("tile id counter exhausted at {}", id),
        }
        id
    }

    /// A generator positioned at the stored RNG state.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.rng_state)
    }

    /// Encode as a compact binary snapshot.
    ///
    /// Two states encode to the same bytes iff they are equal, which makes
    /// this the reference for bit-identical replay checks.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
