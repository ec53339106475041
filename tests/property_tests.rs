//! Property tests for the engine invariants.
//!
//! Reachable states are generated by starting a game with a random seed
//! and replaying a random sequence of inputs.

use proptest::prelude::*;

use number_guesser::core::{Difficulty, FixedTarget, GameRng, GameState, GameStatus, Outcome};
use number_guesser::narration::to_words;
use number_guesser::rules::{start_game, submit_guess};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Baby),
        Just(Difficulty::Normal),
        Just(Difficulty::Masochist),
    ]
}

/// Inputs that never parse as a number.
fn non_numeric() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        Just(".5".to_string()),
        "[a-zA-Z ]{0,12}",
    ]
}

/// Start a game and apply `guesses`, stopping before the game ends.
fn playing_state(difficulty: Difficulty, seed: u64, guesses: &[u32]) -> GameState {
    let mut state = start_game(difficulty, &mut GameRng::new(seed));
    for &guess in guesses {
        let next = submit_guess(&state, &guess.to_string());
        if next.status() != GameStatus::Playing {
            break;
        }
        state = next;
    }
    state
}

proptest! {
    #[test]
    fn prop_start_game_in_range(difficulty in difficulty(), seed in any::<u64>()) {
        let state = start_game(difficulty, &mut GameRng::new(seed));
        let target = state.target_number().unwrap();

        prop_assert!((1..=difficulty.max_number()).contains(&target));
        prop_assert_eq!(state.remaining_attempts(), difficulty.max_attempts());
        prop_assert!(state.history().is_empty());
        prop_assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn prop_non_numeric_input_is_free(
        difficulty in difficulty(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(1u32..=10_000, 0..25),
        input in non_numeric(),
    ) {
        let state = playing_state(difficulty, seed, &guesses);
        let next = submit_guess(&state, &input);

        prop_assert_eq!(next.remaining_attempts(), state.remaining_attempts());
        prop_assert_eq!(next.history(), state.history());
        prop_assert_eq!(next.status(), GameStatus::Playing);
    }

    #[test]
    fn prop_exact_target_always_wins(
        difficulty in difficulty(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(1u32..=10_000, 0..25),
    ) {
        let state = playing_state(difficulty, seed, &guesses);
        let target = state.target_number().unwrap();
        let next = submit_guess(&state, &target.to_string());

        prop_assert_eq!(next.status(), GameStatus::Won);
        prop_assert_eq!(next.history().back().map(|r| r.outcome), Some(Outcome::Correct));
    }

    #[test]
    fn prop_last_attempt_miss_loses(difficulty in difficulty(), target in 1u32..=100, miss in 101u32..=10_000) {
        let mut state = start_game(difficulty, &mut FixedTarget(target));
        while state.remaining_attempts() > 1 {
            state = submit_guess(&state, &miss.to_string());
        }
        prop_assert_eq!(state.status(), GameStatus::Playing);

        let next = submit_guess(&state, &miss.to_string());
        prop_assert_eq!(next.status(), GameStatus::Lost);
        prop_assert_eq!(next.remaining_attempts(), 0);
    }

    #[test]
    fn prop_history_counts_valid_guesses(
        seed in any::<u64>(),
        inputs in prop::collection::vec(prop_oneof!["[0-9]{1,5}", non_numeric()], 0..40),
    ) {
        let mut state = start_game(Difficulty::Masochist, &mut GameRng::new(seed));
        let mut evaluated = 0usize;

        for input in &inputs {
            if !state.accepts_guesses() {
                break;
            }
            let next = submit_guess(&state, input);
            if next.history().len() > state.history().len() {
                evaluated += 1;
            }
            prop_assert!(next.remaining_attempts() <= state.remaining_attempts());
            state = next;
        }

        prop_assert_eq!(state.history().len(), evaluated);
        prop_assert_eq!(
            state.remaining_attempts() as usize + evaluated,
            Difficulty::Masochist.max_attempts() as usize
        );
    }

    #[test]
    fn prop_submit_guess_never_mutates_input(
        difficulty in difficulty(),
        seed in any::<u64>(),
        input in ".{0,8}",
    ) {
        let state = start_game(difficulty, &mut GameRng::new(seed));
        let before = state.clone();
        let _ = submit_guess(&state, &input);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_to_words_is_well_formed(n in -1_000_000i64..=1_000_000) {
        let words = to_words(n);

        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "));
        prop_assert_eq!(words.starts_with("minus "), n < 0);
        prop_assert!(words.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
    }
}

#[test]
fn test_to_words_reference_values() {
    assert_eq!(to_words(0), "zero");
    assert_eq!(to_words(-5), "minus five");
    assert_eq!(to_words(1000), "one thousand");
    assert_eq!(to_words(123), "one hundred and twenty three");
}
