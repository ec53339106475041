//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, GameStatus};
use crate::narration::to_words;

/// Spell an integer in lowercase English words.
#[pyfunction]
#[pyo3(name = "to_words")]
pub fn py_to_words(n: i64) -> String {
    to_words(n)
}

/// Parse a difficulty name, raising `ValueError` on unknown names.
pub(crate) fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    name.parse::<Difficulty>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

pub(crate) fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "idle",
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    }
}
