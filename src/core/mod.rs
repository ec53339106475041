//! Core engine types: difficulty presets, game state, random source.
//!
//! These are plain values. The rules that move a `GameState` forward live
//! in `rules`.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{Difficulty, DifficultyConfig, ParseDifficultyError};
pub use rng::{FixedTarget, GameRng, TargetSource};
pub use state::{GameState, GameStatus, GuessRecord, Outcome};
