//! A single round: one answer, one history

use super::{GameConfig, GameError};
use crate::core::{Feedback, History, Word};
use log::{debug, info};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { guesses: usize },
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// True if the guess is the answer
#[inline]
#[must_use]
pub fn has_won(guess: &Word, answer: &Word) -> bool {
    guess == answer
}

/// One round of play
///
/// Guesses must come from the vocabulary. The history starts empty and is
/// dropped with the round.
#[derive(Debug, Clone)]
pub struct Round<'a> {
    answer: Word,
    vocabulary: &'a [Word],
    history: History,
    config: GameConfig,
}

impl<'a> Round<'a> {
    #[must_use]
    pub const fn new(answer: Word, vocabulary: &'a [Word], config: GameConfig) -> Self {
        Self {
            answer,
            vocabulary,
            history: History::new(),
            config,
        }
    }

    /// Submit a guess typed by the player
    ///
    /// # Errors
    /// - `GameError::RoundOver` once the round is won or lost
    /// - `GameError::InvalidWord` if the input is not six lowercase letters
    /// - `GameError::UnknownWord` if the word is not in the vocabulary
    ///
    /// # Examples
    /// ```
    /// use sixle::core::Word;
    /// use sixle::game::{GameConfig, Round, RoundStatus};
    /// use sixle::wordlists::loader::words_from_slice;
    ///
    /// let vocabulary = words_from_slice(&["affect", "effort", "uproar"]);
    /// let answer = Word::new("affect").unwrap();
    /// let mut round = Round::new(answer, &vocabulary, GameConfig::default());
    ///
    /// assert!(round.submit("zzzzzz").is_err());
    /// assert!(!round.submit("effort").unwrap().is_perfect());
    /// assert!(round.submit("affect").unwrap().is_perfect());
    /// assert_eq!(round.status(), RoundStatus::Won { guesses: 2 });
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<Feedback, GameError> {
        if self.status().is_over() {
            return Err(GameError::RoundOver);
        }

        let guess = Word::new(input)?;
        if !self.vocabulary.contains(&guess) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let feedback = self.history.record(guess, &self.answer);
        debug!("guess {} scored {feedback}", self.history.len());

        match self.status() {
            RoundStatus::Won { guesses } => info!("round won in {guesses}"),
            RoundStatus::Lost => info!("round lost, answer was {}", self.answer),
            RoundStatus::InProgress => {}
        }

        Ok(feedback)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        let guesses = self.history.len();
        match self.history.last() {
            Some(entry) if has_won(entry.guess(), &self.answer) => RoundStatus::Won { guesses },
            _ if self.config.has_lost(guesses) => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }

    /// Number of the next guess, starting at 1
    #[must_use]
    pub fn guess_number(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }
}
