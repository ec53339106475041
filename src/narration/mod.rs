//! Narration: number spelling and the lines shown to the player.
//!
//! Narration is cosmetic. Nothing in the rules depends on these strings.

pub mod messages;
pub mod words;

pub use words::to_words;
