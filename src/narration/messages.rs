//! User-facing narration lines.
//!
//! Guesses and targets are always shown twice: spelled out and as digits.

use super::words::to_words;
use crate::core::{GameStatus, GuessRecord};

/// Shown before any game has been started.
#[must_use]
pub fn idle_prompt() -> &'static str {
    "Select your difficulty level (or don't, I'm not your boss)"
}

/// First line of a new game.
#[must_use]
pub fn greeting(max_number: u32) -> String {
    format!("Guess a number between 1 and {max_number} (or don't, I don't care)")
}

/// Input that did not start with a number.
#[must_use]
pub fn rejected_input() -> &'static str {
    "Wow, numbers are hard, huh? Maybe try one of those?"
}

#[must_use]
pub fn too_low(guess: i64, remaining_attempts: u32) -> String {
    format!(
        "🔺 Too low! {} ({guess}) is pathetic. {remaining_attempts} attempts left before you embarrass yourself further.",
        to_words(guess)
    )
}

#[must_use]
pub fn too_high(guess: i64, remaining_attempts: u32) -> String {
    format!(
        "🔻 Too high! {} ({guess}) is delusional. {remaining_attempts} attempts left before we call it quits.",
        to_words(guess)
    )
}

#[must_use]
pub fn won(target: u32) -> String {
    format!(
        "🎉 Wow, you did it! The number was {} ({target}). Want a cookie?",
        to_words(i64::from(target))
    )
}

#[must_use]
pub fn lost(target: u32) -> String {
    format!(
        "😢 Game over! The number was {} ({target}). Maybe try finger painting instead?",
        to_words(i64::from(target))
    )
}

/// Attempt counter shown while a game is running.
#[must_use]
pub fn attempts_line(remaining_attempts: u32) -> String {
    format!("Attempts remaining: {remaining_attempts} (not that you'll need them all)")
}

/// Label of the start action, depending on whether a game was played.
#[must_use]
pub fn start_prompt(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "Start New Game (I believe in you!)",
        _ => "Try Again (Third time's the charm?)",
    }
}

#[must_use]
pub fn history_heading() -> &'static str {
    "YOUR PATH OF FAILURE"
}

#[must_use]
pub fn history_count(guesses: usize) -> String {
    format!("{guesses} questionable decisions")
}

/// One history row, without the outcome label.
#[must_use]
pub fn history_entry(record: &GuessRecord) -> String {
    format!("{} ({})", to_words(record.guess), record.guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    #[test]
    fn test_greeting_names_range() {
        assert_eq!(
            greeting(100),
            "Guess a number between 1 and 100 (or don't, I don't care)"
        );
    }

    #[test]
    fn test_comparison_lines() {
        assert_eq!(
            too_low(10, 9),
            "🔺 Too low! ten (10) is pathetic. 9 attempts left before you embarrass yourself further."
        );
        assert_eq!(
            too_high(90, 8),
            "🔻 Too high! ninety (90) is delusional. 8 attempts left before we call it quits."
        );
    }

    #[test]
    fn test_terminal_lines_reveal_target() {
        assert_eq!(
            won(42),
            "🎉 Wow, you did it! The number was forty two (42). Want a cookie?"
        );
        assert_eq!(
            lost(1050),
            "😢 Game over! The number was one thousand fifty (1050). Maybe try finger painting instead?"
        );
    }

    #[test]
    fn test_start_prompt() {
        assert_eq!(start_prompt(GameStatus::Idle), "Start New Game (I believe in you!)");
        assert_eq!(start_prompt(GameStatus::Won), "Try Again (Third time's the charm?)");
        assert_eq!(start_prompt(GameStatus::Lost), "Try Again (Third time's the charm?)");
    }

    #[test]
    fn test_history_lines() {
        assert_eq!(history_count(3), "3 questionable decisions");
        assert_eq!(
            history_entry(&GuessRecord::new(-3, Outcome::TooLow)),
            "minus three (-3)"
        );
    }
}
