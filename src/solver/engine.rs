//! Main solver interface

use super::constraints::ConstraintTable;
use super::filter::filter_candidates;
use super::strategy::Strategy;
use crate::core::{History, Word};
use log::debug;

/// Main solver
///
/// Ties a vocabulary to a guess selection strategy. Holds no per-round state:
/// every query recomputes constraints from the history it is given.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    vocabulary: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and vocabulary
    pub const fn new(strategy: S, vocabulary: &'a [Word]) -> Self {
        Self {
            strategy,
            vocabulary,
        }
    }

    /// The vocabulary candidates are drawn from
    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }

    /// Constraint table for the history
    #[must_use]
    pub fn constraints(&self, history: &History) -> ConstraintTable {
        ConstraintTable::derive(history)
    }

    /// Vocabulary words still consistent with the history, in vocabulary order
    #[must_use]
    pub fn candidates(&self, history: &History) -> Vec<&'a Word> {
        self.candidates_under(history, &self.constraints(history))
    }

    /// Like [`Solver::candidates`], with `constraints` already derived from `history`
    #[must_use]
    pub fn candidates_under(
        &self,
        history: &History,
        constraints: &ConstraintTable,
    ) -> Vec<&'a Word> {
        let candidates = filter_candidates(self.vocabulary, history, constraints);
        debug!(
            "{} of {} words remain after {} guesses",
            candidates.len(),
            self.vocabulary.len(),
            history.len()
        );
        candidates
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &History) -> usize {
        self.candidates(history).len()
    }

    /// Suggest the next guess
    ///
    /// Returns `None` when no candidate is left.
    #[must_use]
    pub fn next_guess(&self, history: &History) -> Option<&'a Word> {
        self.choose(&self.candidates(history))
    }

    /// Let the strategy pick among already filtered `candidates`
    #[must_use]
    pub fn choose(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let guess = self.strategy.select_guess(candidates);
        if let Some(word) = guess {
            debug!("suggesting {word}");
        }
        guess
    }
}
