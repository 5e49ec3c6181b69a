//! Wordle Pilot
//!
//! A candidate word-filtering and ranking engine for 5-letter word games:
//! load a lexicon once, fold game feedback into a [`core::GuessState`], and
//! pick the best next guess by letter-frequency scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_pilot::core::{GuessState, Letter};
//! use wordle_pilot::lexicon::LexiconIndex;
//! use wordle_pilot::solver::{Engine, Scoring};
//!
//! let index = LexiconIndex::build(["crane", "slate", "crate"]).unwrap();
//! let engine = Engine::new(&index, Scoring::Positional);
//!
//! let mut state = GuessState::new();
//! state.add_correct(Letter::C, 0);
//!
//! let guess = engine.next_guess(&state).unwrap();
//! assert!(guess.text().starts_with('c'));
//! ```

// Core domain types
pub mod core;

// Lexicon loading and letter-bucket indices
pub mod lexicon;

// Filtering, scoring, and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
