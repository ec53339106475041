//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::GameRng;
use crate::session::GameSession;

use super::py_core::{parse_difficulty, status_name};

/// Python wrapper for a game session.
///
/// Holds the current game, the difficulty for the next one, and the RNG.
#[pyclass(name = "GuessGame")]
pub struct PyGuessGame {
    session: GameSession,
}

#[pymethods]
impl PyGuessGame {
    /// Create an idle session.
    ///
    /// # Arguments
    /// - difficulty: "baby", "normal" or "masochist"
    /// - seed: RNG seed for reproducible targets, random if omitted
    #[new]
    #[pyo3(signature = (difficulty = "normal", seed = None))]
    fn new(difficulty: &str, seed: Option<u64>) -> PyResult<Self> {
        let difficulty = parse_difficulty(difficulty)?;
        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            session: GameSession::new(difficulty, rng),
        })
    }

    /// Start a new game at the selected difficulty.
    fn start(&mut self) -> String {
        self.session.start().message().to_string()
    }

    /// Submit a guess and return the narration line.
    ///
    /// Ignored unless a game is being played.
    fn guess(&mut self, raw: &str) -> String {
        self.session.guess(raw).message().to_string()
    }

    /// Guess while playing, otherwise start a new game.
    fn submit_or_restart(&mut self, raw: &str) -> String {
        self.session.submit_or_restart(raw).message().to_string()
    }

    /// Pick the difficulty for the next game.
    fn select_difficulty(&mut self, name: &str) -> PyResult<()> {
        self.session.select_difficulty(parse_difficulty(name)?);
        Ok(())
    }

    /// "idle", "playing", "won" or "lost".
    #[getter]
    fn status(&self) -> &'static str {
        status_name(self.session.state().status())
    }

    #[getter]
    fn message(&self) -> String {
        self.session.state().message().to_string()
    }

    #[getter]
    fn remaining_attempts(&self) -> u32 {
        self.session.state().remaining_attempts()
    }

    /// Difficulty of the current game.
    #[getter]
    fn difficulty(&self) -> &'static str {
        self.session.state().difficulty().label()
    }

    /// Guesses so far as `(guess, label)` pairs.
    #[getter]
    fn history(&self) -> Vec<(i64, &'static str)> {
        self.session
            .state()
            .history()
            .iter()
            .map(|record| (record.guess, record.outcome.label()))
            .collect()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.session.seed()
    }

    /// The hidden number, only once the game is over.
    #[getter]
    fn target(&self) -> Option<u32> {
        let state = self.session.state();
        if state.status().is_terminal() {
            state.target_number()
        } else {
            None
        }
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "GuessGame(difficulty={}, status={}, remaining_attempts={})",
            state.difficulty().label(),
            status_name(state.status()),
            state.remaining_attempts()
        )
    }
}
