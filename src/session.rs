//! Stateful driver for front ends.
//!
//! `GameSession` keeps what a front end would otherwise juggle itself: the
//! current snapshot, the difficulty picked for the next game, and the
//! random source. It adds no rules of its own.

use log::info;

use crate::core::{Difficulty, GameRng, GameState, GameStatus};
use crate::rules::{start_game, submit_guess};

/// Current game plus the inputs needed to start the next one.
#[derive(Clone, Debug)]
pub struct GameSession {
    rng: GameRng,
    selected: Difficulty,
    state: GameState,
}

impl GameSession {
    /// Create an idle session with the given RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            rng,
            selected: difficulty,
            state: GameState::idle(difficulty),
        }
    }

    /// Create an idle session with a fixed seed.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, GameRng::new(seed))
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Difficulty the next game will use.
    #[must_use]
    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected
    }

    /// Seed of the session's RNG, for replaying it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Pick the difficulty for the next game.
    ///
    /// A game in progress keeps its own difficulty.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.selected = difficulty;
        if self.state.status() == GameStatus::Idle {
            self.state = GameState::idle(difficulty);
        }
    }

    /// Start a new game at the selected difficulty.
    pub fn start(&mut self) -> &GameState {
        info!("new {} game (seed {})", self.selected, self.rng.seed());
        self.state = start_game(self.selected, &mut self.rng);
        &self.state
    }

    /// Submit a guess to the current game.
    pub fn guess(&mut self, raw_input: &str) -> &GameState {
        self.state = submit_guess(&self.state, raw_input);
        &self.state
    }

    /// Guess while a game is running, otherwise start a new one.
    pub fn submit_or_restart(&mut self, raw_input: &str) -> &GameState {
        if self.state.accepts_guesses() {
            self.guess(raw_input)
        } else {
            self.start()
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default(), GameRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::with_seed(Difficulty::Baby, 42);

        assert_eq!(session.state().status(), GameStatus::Idle);
        assert_eq!(session.selected_difficulty(), Difficulty::Baby);
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn test_submit_or_restart_starts_when_idle() {
        let mut session = GameSession::with_seed(Difficulty::Baby, 42);

        let state = session.submit_or_restart("50");
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.remaining_attempts(), 10);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_submit_or_restart_guesses_when_playing() {
        let mut session = GameSession::with_seed(Difficulty::Baby, 42);
        session.start();

        let state = session.submit_or_restart("0");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.remaining_attempts(), 9);
    }

    #[test]
    fn test_select_difficulty_applies_on_next_start() {
        let mut session = GameSession::with_seed(Difficulty::Baby, 42);
        session.start();
        session.select_difficulty(Difficulty::Masochist);

        assert_eq!(session.state().difficulty(), Difficulty::Baby);
        assert_eq!(session.state().status(), GameStatus::Playing);

        let state = session.start();
        assert_eq!(state.difficulty(), Difficulty::Masochist);
        assert_eq!(state.remaining_attempts(), 20);
    }

    #[test]
    fn test_select_difficulty_while_idle_updates_state() {
        let mut session = GameSession::with_seed(Difficulty::Baby, 42);
        session.select_difficulty(Difficulty::Normal);
        assert_eq!(session.state().difficulty(), Difficulty::Normal);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut a = GameSession::with_seed(Difficulty::Masochist, 9);
        let mut b = GameSession::with_seed(Difficulty::Masochist, 9);

        for _ in 0..5 {
            assert_eq!(a.start().target_number(), b.start().target_number());
        }
    }
}
