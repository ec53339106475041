//! Python bindings for the number guesser.
//!
//! # Quick Start
//!
//! ```python
//! import number_guesser as ng
//!
//! game = ng.GuessGame(difficulty="baby", seed=42)
//! game.start()
//!
//! print(game.guess("50"))
//! print(game.remaining_attempts, game.history)
//!
//! ng.to_words(123)  # "one hundred and twenty three"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// number_guesser: guess the hidden number before your attempts run out.
#[pymodule]
fn number_guesser(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_to_words, m)?)?;
    m.add_class::<PyGuessGame>()?;

    Ok(())
}
