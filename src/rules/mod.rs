//! Game rules.
//!
//! - `engine`: `start_game`, `submit_guess`, terminal detection
//! - `input`: parsing typed guesses

pub mod engine;
pub mod input;

pub use engine::{is_terminal, start_game, submit_guess, GameResult};
pub use input::parse_guess;
