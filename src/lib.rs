//! # number-guesser
//!
//! A number-guessing game engine: pick a difficulty, get a hidden number,
//! and narrow it down with "too high"/"too low" narration before the
//! attempts run out.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: `submit_guess` takes a snapshot and returns a
//!    new one. Nothing is mutated in place, so independent games need no
//!    coordination.
//!
//! 2. **Injected Randomness**: Drawing the target is the only random step
//!    and goes through `TargetSource`. Seed a `GameRng` or pin the target
//!    with `FixedTarget` for reproducible games.
//!
//! 3. **Total Operations**: Every input yields a well-formed state. Bad
//!    input only changes the message.
//!
//! ## Modules
//!
//! - `core`: Difficulty presets, game state, random source
//! - `rules`: `start_game`, `submit_guess`, guess parsing
//! - `narration`: Number spelling and player-facing lines
//! - `session`: Stateful driver for front ends
//! - `cli`: Terminal front end (`cli` feature)
//! - `python`: Python bindings (`python` feature)
//!
//! ## Example
//!
//! ```
//! use number_guesser::{start_game, submit_guess, Difficulty, FixedTarget, GameStatus};
//!
//! let state = start_game(Difficulty::Baby, &mut FixedTarget(42));
//! let state = submit_guess(&state, "10");
//! assert_eq!(state.remaining_attempts(), 9);
//!
//! let state = submit_guess(&state, "42");
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

pub mod core;
pub mod narration;
pub mod rules;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, DifficultyConfig, ParseDifficultyError,
    FixedTarget, GameRng, TargetSource,
    GameState, GameStatus, GuessRecord, Outcome,
};

pub use crate::narration::to_words;

pub use crate::rules::{is_terminal, parse_guess, start_game, submit_guess, GameResult};

pub use crate::session::GameSession;
