//! Game state snapshots.
//!
//! A `GameState` is a value: the engine never changes a state it was
//! handed, it returns a new one. History is an `im::Vector`, so producing
//! the next snapshot clones in O(1) no matter how many guesses were made.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start--> Playing --correct--> Won
//!                 Playing --last attempt missed--> Lost
//!                 Playing --miss, attempts left--> Playing
//! Won | Lost --start--> Playing
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::config::Difficulty;
use crate::narration::messages;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game started yet.
    #[default]
    Idle,
    /// Guesses are being accepted.
    Playing,
    /// The target was guessed.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl GameStatus {
    /// Check if the game has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// How a single guess compared to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    /// Classify `guess` against `target`.
    #[must_use]
    pub fn of(guess: i64, target: u32) -> Self {
        match guess.cmp(&i64::from(target)) {
            Ordering::Less => Outcome::TooLow,
            Ordering::Greater => Outcome::TooHigh,
            Ordering::Equal => Outcome::Correct,
        }
    }

    /// Label shown next to the guess in the history list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::TooLow => "Weak",
            Outcome::TooHigh => "Overachiever",
            Outcome::Correct => "Miracle",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluated guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The number that was guessed.
    pub guess: i64,
    /// How it compared to the target.
    pub outcome: Outcome,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: i64, outcome: Outcome) -> Self {
        Self { guess, outcome }
    }
}

/// Snapshot of one game.
///
/// Fields are read through accessors; only the rules engine builds new
/// snapshots, which keeps the target fixed for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) difficulty: Difficulty,
    pub(crate) status: GameStatus,
    pub(crate) target_number: Option<u32>,
    pub(crate) remaining_attempts: u32,
    pub(crate) history: Vector<GuessRecord>,
    pub(crate) message: String,
}

impl GameState {
    /// State before any game has been started.
    ///
    /// No target is drawn and no attempts are available.
    #[must_use]
    pub fn idle(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            status: GameStatus::Idle,
            target_number: None,
            remaining_attempts: 0,
            history: Vector::new(),
            message: messages::idle_prompt().to_string(),
        }
    }

    /// Fresh game with the full attempt budget.
    pub(crate) fn playing(difficulty: Difficulty, target: u32) -> Self {
        let config = difficulty.config();
        Self {
            difficulty,
            status: GameStatus::Playing,
            target_number: Some(target),
            remaining_attempts: config.max_attempts,
            history: Vector::new(),
            message: messages::greeting(config.max_number),
        }
    }

    /// Difficulty of this game.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The hidden number, `None` while idle.
    ///
    /// Callers should only reveal it once `status().is_terminal()`.
    #[must_use]
    pub fn target_number(&self) -> Option<u32> {
        self.target_number
    }

    /// Guesses left in this game.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Guesses evaluated so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Last narration line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Guesses spent so far.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.history.len() as u32
    }

    /// Check whether `submit_guess` will evaluate input in this state.
    #[must_use]
    pub fn accepts_guesses(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle(Difficulty::default())
    }
}
