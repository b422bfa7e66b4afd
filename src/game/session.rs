//! A running game: engine, current state and turn history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, EngineError, GameState, Move, RulesConfig, DEFAULT_SEED};
use crate::events::EngineEvent;
use crate::rules::{self, Engine};

/// One accepted move and everything it caused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub mv: Move,
    pub events: Vec<EngineEvent>,
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u32>,
    rules: RulesConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Validate the rules and deal the opening tiles.
    pub fn build(self) -> Result<Game, EngineError> {
        let engine = Engine::new(self.rules)?;
        let seed = self.seed.unwrap_or(DEFAULT_SEED);
        let state = engine.create_game(Some(seed));
        Ok(Game {
            engine,
            seed,
            state,
            history: Vector::new(),
        })
    }
}

/// A game in progress.
///
/// The history only holds moves the engine accepted, so replaying
/// [`Game::moves`] from [`Game::seed`] rebuilds the same state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    engine: Engine,
    seed: u32,
    state: GameState,
    history: Vector<TurnRecord>,
}

impl Game {
    /// Play a move and return its events.
    ///
    /// A blocked move returns its single `blocked` event and changes
    /// nothing. After the game ends every move returns no events.
    pub fn play(&mut self, mv: Move) -> Vec<EngineEvent> {
        let outcome = self.engine.apply_move(&self.state, mv);
        if outcome.is_blocked() || outcome.events.is_empty() {
            return outcome.events;
        }

        let (state, events) = outcome.into_parts();
        self.state = state;
        self.history.push_back(TurnRecord {
            mv,
            events: events.clone(),
        });
        events
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Accepted moves, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|record| record.mv)
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.engine.legal_moves(&self.state)
    }

    /// Whether the tile at `from` has anywhere to go. Input layers use this
    /// to decide whether a drag should start at all.
    #[must_use]
    pub fn can_move_from(&self, from: Coord) -> bool {
        !self.state.game_over && rules::can_move_from(&self.state.board, from)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Moves accepted so far.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::events::EventKind;

    #[test]
    fn test_builder_defaults() {
        let game = GameBuilder::new().build().unwrap();

        assert_eq!(game.seed(), DEFAULT_SEED);
        assert_eq!(game.state(), &Engine::default().create_game(None));
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn test_builder_rejects_bad_rules() {
        let result = GameBuilder::new()
            .rules(RulesConfig::default().with_strain_gap(0))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_play_records_accepted_moves() {
        let mut game = GameBuilder::new().seed(1).build().unwrap();

        let events = game.play(Move::at(3, 2, Direction::Left));

        assert_eq!(events[0].kind(), EventKind::Move);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.moves().collect::<Vec<_>>(), vec![Move::at(3, 2, Direction::Left)]);
    }

    #[test]
    fn test_blocked_move_is_not_recorded() {
        let mut game = GameBuilder::new().seed(1).build().unwrap();
        let before = game.state().clone();

        let events = game.play(Move::at(0, 0, Direction::Up));

        assert_eq!(events, vec![EngineEvent::blocked(Coord::new(0, 0), Direction::Up)]);
        assert_eq!(game.state(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_can_move_from() {
        let game = GameBuilder::new().seed(1).build().unwrap();

        assert!(game.can_move_from(Coord::new(1, 4)));
        assert!(!game.can_move_from(Coord::new(0, 0)));
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut game = GameBuilder::new().seed(1).build().unwrap();
        game.play(Move::at(3, 2, Direction::Left));
        let snapshot = game.history().clone();

        let mv = game.legal_moves()[0];
        game.play(mv);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(game.history().len(), 2);
    }
}
