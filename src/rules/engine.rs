//! Move resolution.
//!
//! [`Engine`] turns a state and a move into a new state plus the ordered
//! events that narrate the turn. The caller's state is never touched: a legal
//! move clones it, and every phase mutates the clone.
//!
//! ## Phases
//!
//! 1. Validation: an empty source, an off-board or occupied destination,
//!    yields a single `blocked` event and the unchanged state.
//! 2. Slide the tile one cell.
//! 3. Merge, highest values first.
//! 4. Strain accrual.
//! 5. Fracture: overflow merges first, then fully strained tiles.
//! 6. Strain decay.
//! 7. Spawn one random tile.
//! 8. Terminal check.
//!
//! The turn counter then advances by one. Once the game is over every call
//! is a no-op with no events.

use serde::{Deserialize, Serialize};

use super::{fracture, legal, merge, spawn, strain};
use crate::core::{EngineError, GameState, Move, RulesConfig, DEFAULT_SEED};
use crate::events::{EngineEvent, EventKind};

/// Result of [`Engine::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub state: GameState,
    pub events: Vec<EngineEvent>,
}

impl MoveOutcome {
    /// The move was rejected and the state is unchanged.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self.events.first(), Some(EngineEvent::Blocked { .. }))
    }

    /// This move ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.events.last().map(EngineEvent::kind) == Some(EventKind::End)
    }

    /// Split into state and events.
    #[must_use]
    pub fn into_parts(self) -> (GameState, Vec<EngineEvent>) {
        (self.state, self.events)
    }
}

/// The rules engine.
///
/// Holds only the rule constants. All game data lives in [`GameState`], so
/// one engine can drive any number of games.
///
/// Serializes as its [`RulesConfig`]; deserializing re-runs validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "RulesConfig", try_from = "RulesConfig")]
pub struct Engine {
    config: RulesConfig,
}

impl Engine {
    /// Create an engine, rejecting unusable rules.
    pub fn new(config: RulesConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Start a game: an empty board followed by two spawn phases.
    ///
    /// `None` uses [`DEFAULT_SEED`].
    #[must_use]
    pub fn create_game(&self, seed: Option<u32>) -> GameState {
        let mut state = GameState::new(seed.unwrap_or(DEFAULT_SEED));
        for _ in 0..2 {
            spawn::spawn_tile(&self.config, &mut state);
        }
        log::debug!("new game seed={} rng={}", seed.unwrap_or(DEFAULT_SEED), state.rng_state);
        state
    }

    /// Playable moves for `state`, row-major then up, left, right, down.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        legal::legal_moves(state)
    }

    /// Whether `state` has neither a slide nor a merge available.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> bool {
        legal::is_terminal(&state.board)
    }

    /// Resolve one move.
    #[must_use]
    pub fn apply_move(&self, state: &GameState, mv: Move) -> MoveOutcome {
        if state.game_over {
            return MoveOutcome {
                state: state.clone(),
                events: Vec::new(),
            };
        }

        let tile = match state.board.get(mv.from) {
            Some(tile) if legal::is_playable(&state.board, mv) => *tile,
            _ => {
                log::debug!("turn {}: {} blocked", state.turn_count, mv);
                return MoveOutcome {
                    state: state.clone(),
                    events: vec![EngineEvent::blocked(mv.from, mv.dir)],
                };
            }
        };

        let mut next = state.clone();
        let mut events = Vec::new();
        let to = mv.target();

        next.board.take(mv.from);
        next.board.place(to, tile);
        events.push(EngineEvent::moved(mv.from, to, tile.id));

        let overflow = merge::resolve_merges(&self.config, &mut next, to, &mut events);
        strain::accrue_strain(&self.config, &mut next.board, &mut events);
        fracture::resolve_fractures(&self.config, &mut next, overflow, &mut events);
        strain::decay_strain(&mut next.board);
        events.extend(spawn::spawn_tile(&self.config, &mut next));

        if legal::is_terminal(&next.board) {
            next.game_over = true;
            events.push(EngineEvent::End);
            log::debug!("game over after turn {}", next.turn_count + 1);
        }
        next.turn_count += 1;

        log::debug!("turn {}: {} -> {} events", state.turn_count, mv, events.len());
        MoveOutcome { state: next, events }
    }
}

impl TryFrom<RulesConfig> for Engine {
    type Error = EngineError;

    fn try_from(config: RulesConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<Engine> for RulesConfig {
    fn from(engine: Engine) -> Self {
        engine.config
    }
}
