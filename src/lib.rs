//! Sixle
//!
//! A six-letter word guessing game with a constraint-based solver that
//! suggests the next guess from the feedback seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use sixle::core::{History, Word};
//! use sixle::solver::{FrequencyStrategy, Solver};
//! use sixle::wordlists::{VOCAB, loader::words_from_slice};
//!
//! let vocabulary = words_from_slice(VOCAB);
//! let solver = Solver::new(FrequencyStrategy, &vocabulary);
//!
//! let mut history = History::new();
//! let answer = Word::new("affect").unwrap();
//! let guess = solver.next_guess(&history).unwrap().clone();
//! let feedback = history.record(guess, &answer);
//!
//! println!("{feedback}: {} candidates left", solver.count_candidates(&history));
//! ```

// Core domain types
pub mod core;

// Constraint derivation, filtering and guess selection
pub mod solver;

// Rounds, keyboard state and session stats
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
