//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::frequency::best_by_frequency;
use crate::core::Word;

/// A strategy for picking the next guess among the surviving candidates
pub trait Strategy {
    /// Select one guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter-frequency heuristic (default)
    Frequency(FrequencyStrategy),
    /// First candidate in vocabulary order
    First(FirstStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "first", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name, as accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Letter-frequency strategy
///
/// Picks the candidate with the highest [`frequency_score`](super::frequency_score).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        best_by_frequency(candidates).map(|(word, _)| word)
    }
}

/// First-candidate strategy
///
/// Takes the earliest surviving word. Mostly useful as a baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        candidates.first().copied()
    }
}

/// Random strategy
///
/// Picks any surviving candidate with equal probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}

/// Suggest the next guess with the default strategy
///
/// # Examples
/// ```
/// use sixle::solver::suggest;
/// use sixle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["affect", "effort", "uproar"]);
/// let candidates: Vec<_> = words.iter().collect();
///
/// assert_eq!(suggest(&candidates).unwrap().text(), "effort");
/// assert!(suggest(&[]).is_none());
/// ```
#[must_use]
pub fn suggest<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    FrequencyStrategy.select_guess(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> Vec<Word> {
        ["uproar", "affect", "effort"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn frequency_strategy_selects_best_scoring() {
        let words = setup_test_data();
        let candidates: Vec<&Word> = words.iter().collect();

        let guess = FrequencyStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.text(), "effort");
    }

    #[test]
    fn suggest_keeps_first_of_equal_scores() {
        let words: Vec<Word> = ["action", "itself"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        let forward: Vec<&Word> = words.iter().collect();
        assert_eq!(suggest(&forward).unwrap().text(), "action");

        let reversed: Vec<&Word> = words.iter().rev().collect();
        assert_eq!(suggest(&reversed).unwrap().text(), "itself");
    }

    #[test]
    fn first_strategy_keeps_vocabulary_order() {
        let words = setup_test_data();
        let candidates: Vec<&Word> = words.iter().collect();

        let guess = FirstStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.text(), "uproar");
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let words = setup_test_data();
        let candidates: Vec<&Word> = words.iter().collect();

        for _ in 0..20 {
            let guess = RandomStrategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn every_strategy_returns_none_on_empty() {
        for name in ["frequency", "first", "random"] {
            assert!(StrategyType::from_name(name).select_guess(&[]).is_none());
        }
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["frequency", "first", "random"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("entropy"), StrategyType::default());
    }
}
