//! Playing rounds against a hidden answer
//!
//! Everything here sits on top of the core types: it chooses answers, enforces
//! the guess limit and keeps per-session bookkeeping.

mod keyboard;
mod picker;
mod round;
mod stats;

pub use keyboard::Keyboard;
pub use picker::AnswerPicker;
pub use round::{Round, RoundStatus, has_won};
pub use stats::Stats;

use crate::core::WordError;
use std::fmt;

/// Default number of guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Round settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }

    /// True once `guess_number` guesses have used up the allowance
    #[must_use]
    pub const fn has_lost(&self, guess_number: usize) -> bool {
        guess_number >= self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_GUESSES)
    }
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWord(WordError),
    UnknownWord(String),
    RoundOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::UnknownWord(word) => write!(f, "Unknown word: {word}"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::UnknownWord(_) | Self::RoundOver => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
