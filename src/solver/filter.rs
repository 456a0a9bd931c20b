//! Candidate filtering against derived constraints

use super::constraints::{ConstraintTable, PositionSet};
use crate::core::{ALPHABET_SIZE, History, Word, letter_index};
use rustc_hash::FxHashSet;

/// Positions of every letter in `word`, indexed by alphabet position
fn letter_positions(word: &Word) -> [PositionSet; ALPHABET_SIZE] {
    let mut positions = [PositionSet::EMPTY; ALPHABET_SIZE];
    for (i, &ch) in word.chars().iter().enumerate() {
        positions[letter_index(ch)].insert(i);
    }
    positions
}

/// Whether `word` satisfies every letter constraint in `constraints`
///
/// Guess history is not consulted; see [`filter_candidates`] for that.
#[must_use]
pub fn satisfies(word: &Word, constraints: &ConstraintTable) -> bool {
    let positions = letter_positions(word);
    constraints
        .iter()
        .all(|(letter, constraint)| constraint.admits(positions[letter_index(letter)]))
}

/// Words of `vocabulary` still consistent with the history
///
/// A word survives if it was never guessed and, for every letter, its count
/// matches the exact count (or reaches the minimum), it avoids every forbidden
/// position and fills every required one. Vocabulary order is preserved. An
/// empty result means no consistent word is left; it is not an error.
///
/// # Examples
/// ```
/// use sixle::core::{History, Word};
/// use sixle::solver::{ConstraintTable, filter_candidates};
/// use sixle::wordlists::loader::words_from_slice;
///
/// let vocabulary = words_from_slice(&["affect", "effort", "uproar"]);
/// let mut history = History::new();
/// history.record(Word::new("effort").unwrap(), &Word::new("affect").unwrap());
///
/// let constraints = ConstraintTable::derive(&history);
/// let candidates = filter_candidates(&vocabulary, &history, &constraints);
///
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "affect");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    vocabulary: &'a [Word],
    history: &History,
    constraints: &ConstraintTable,
) -> Vec<&'a Word> {
    let guessed: FxHashSet<&Word> = history.iter().map(|entry| entry.guess()).collect();

    vocabulary
        .iter()
        .filter(|&word| !guessed.contains(word) && satisfies(word, constraints))
        .collect()
}
