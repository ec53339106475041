//! Game rules: starting a game and evaluating guesses.
//!
//! None of these touch the state they are given:
//! - `start_game` draws the target through the injected `TargetSource`
//! - `submit_guess` reads the previous snapshot and returns the next one
//! - `is_terminal` reports how a finished game ended

use log::{debug, trace, warn};

use super::input::parse_guess;
use crate::core::{Difficulty, GameState, GameStatus, GuessRecord, Outcome, TargetSource};
use crate::narration::messages;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The target was guessed.
    Won {
        /// Guesses spent, including the correct one.
        attempts_used: u32,
    },
    /// The attempt budget ran out.
    Lost {
        /// The number that was never found.
        target: u32,
    },
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Won { .. })
    }
}

/// Start a new game at the given difficulty.
///
/// Draws the target from `[1, max_number]` and grants the full attempt
/// budget. Always succeeds.
pub fn start_game<S>(difficulty: Difficulty, source: &mut S) -> GameState
where
    S: TargetSource + ?Sized,
{
    let config = difficulty.config();
    let target = source.draw_target(config.max_number);

    debug!(
        "starting {} game: range 1-{}, {} attempts",
        difficulty, config.max_number, config.max_attempts
    );
    trace!("target drawn: {target}");

    GameState::playing(difficulty, target)
}

/// Evaluate one guess and return the next snapshot.
///
/// Input without a leading number only replaces the message. A parsed
/// guess costs one attempt, is appended to the history, and may end the
/// game. A correct guess wins even on the last attempt.
///
/// Guesses are only evaluated while `Playing`; in any other status the
/// input state is returned unchanged. Check `GameState::accepts_guesses`
/// first.
#[must_use]
pub fn submit_guess(state: &GameState, raw_input: &str) -> GameState {
    let target = match (state.status, state.target_number) {
        (GameStatus::Playing, Some(target)) => target,
        (status, _) => {
            warn!("guess {raw_input:?} submitted while {status:?}, ignoring");
            return state.clone();
        }
    };

    let mut next = state.clone();

    let Some(guess) = parse_guess(raw_input) else {
        debug!("rejected non-numeric guess {raw_input:?}");
        next.message = messages::rejected_input().to_string();
        return next;
    };

    next.remaining_attempts = state.remaining_attempts.saturating_sub(1);
    let outcome = Outcome::of(guess, target);

    next.message = match outcome {
        Outcome::Correct => {
            next.status = GameStatus::Won;
            messages::won(target)
        }
        Outcome::TooLow => messages::too_low(guess, next.remaining_attempts),
        Outcome::TooHigh => messages::too_high(guess, next.remaining_attempts),
    };
    next.history.push_back(GuessRecord::new(guess, outcome));

    if outcome != Outcome::Correct && next.remaining_attempts == 0 {
        next.status = GameStatus::Lost;
        next.message = messages::lost(target);
    }

    debug!(
        "guess {guess} -> {outcome:?}, {} attempts left, status {:?}",
        next.remaining_attempts, next.status
    );

    next
}

/// Check if the game is over.
///
/// Returns `Some(result)` for `Won` and `Lost`, `None` otherwise.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    match (state.status, state.target_number) {
        (GameStatus::Won, _) => Some(GameResult::Won {
            attempts_used: state.attempts_used(),
        }),
        (GameStatus::Lost, Some(target)) => Some(GameResult::Lost { target }),
        _ => None,
    }
}
