//! Difficulty presets.
//!
//! The game ships three fixed presets. Each one bundles the upper bound of
//! the guessable range with the attempt budget:
//!
//! | Difficulty  | Range     | Attempts |
//! |-------------|-----------|----------|
//! | `Baby`      | 1-100     | 10       |
//! | `Normal`    | 1-1000    | 15       |
//! | `Masochist` | 1-10000   | 20       |
//!
//! Presets are not externally configurable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Range and attempt budget for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Largest number that can be drawn (the range starts at 1).
    pub max_number: u32,

    /// Number of guesses allowed per game.
    pub max_attempts: u32,
}

/// Difficulty selected before a game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 1-100, 10 attempts.
    Baby,
    /// 1-1000, 15 attempts.
    #[default]
    Normal,
    /// 1-10000, 20 attempts.
    Masochist,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Baby, Difficulty::Normal, Difficulty::Masochist];

    /// Get the preset for this difficulty.
    #[must_use]
    pub const fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Baby => DifficultyConfig {
                max_number: 100,
                max_attempts: 10,
            },
            Difficulty::Normal => DifficultyConfig {
                max_number: 1000,
                max_attempts: 15,
            },
            Difficulty::Masochist => DifficultyConfig {
                max_number: 10_000,
                max_attempts: 20,
            },
        }
    }

    /// Upper bound of the guessable range.
    #[must_use]
    pub const fn max_number(self) -> u32 {
        self.config().max_number
    }

    /// Attempt budget.
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        self.config().max_attempts
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Baby => "baby mode",
            Difficulty::Normal => "normie",
            Difficulty::Masochist => "MASOCHIST",
        }
    }

    /// Selector label naming the range, e.g. `"Normie (1-1000)"`.
    #[must_use]
    pub const fn selector_label(self) -> &'static str {
        match self {
            Difficulty::Baby => "Baby Mode (1-100)",
            Difficulty::Normal => "Normie (1-1000)",
            Difficulty::Masochist => "MASOCHIST (1-10000)",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a difficulty name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDifficultyError {
    input: String,
}

impl ParseDifficultyError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected baby, normal or masochist)",
            self.input
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parse a difficulty name, case-insensitively.
    ///
    /// Accepts the variant names as well as the display labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baby" | "baby mode" => Ok(Difficulty::Baby),
            "normal" | "normie" => Ok(Difficulty::Normal),
            "masochist" => Ok(Difficulty::Masochist),
            _ => Err(ParseDifficultyError {
                input: s.to_string(),
            }),
        }
    }
}
