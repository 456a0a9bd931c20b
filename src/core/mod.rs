//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable values.

mod feedback;
mod history;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSymbol, score};
pub use history::{History, HistoryEntry};
pub use word::{ALPHABET, ALPHABET_SIZE, LENGTH, Word, WordError, letter_index};
