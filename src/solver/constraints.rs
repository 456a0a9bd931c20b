//! Letter constraints derived from a guess history
//!
//! Every call to [`ConstraintTable::derive`] folds the whole history from
//! scratch into one [`LetterConstraint`] per alphabet letter. Nothing is cached
//! between calls.

use crate::core::{ALPHABET, ALPHABET_SIZE, FeedbackSymbol, History, LENGTH, letter_index};
use log::trace;
use std::fmt;

/// A set of word positions (0-5), stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1 << LENGTH) - 1);

    /// Add `position` to the set
    ///
    /// # Panics
    /// Panics in debug mode if position >= 6
    #[inline]
    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < LENGTH, "position out of range");
        self.0 |= 1 << position;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < LENGTH && self.0 & (1 << position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..LENGTH).filter(move |&p| self.contains(p))
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        write!(f, "{{{}}}", positions.join(","))
    }
}

/// What the history proves about one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterConstraint {
    /// Minimum number of occurrences proven present
    pub min_count: u8,
    /// Exact number of occurrences, once an `Incorrect` pins it down
    pub exact_count: Option<u8>,
    /// Positions where the letter is proven absent
    pub forbidden: PositionSet,
    /// Positions where the letter is proven present
    pub required: PositionSet,
}

impl LetterConstraint {
    /// Whether `count` occurrences are consistent with this constraint
    #[inline]
    #[must_use]
    pub fn admits_count(&self, count: u8) -> bool {
        self.exact_count
            .map_or(count >= self.min_count, |exact| count == exact)
    }

    /// Whether a word holding this letter at `positions` is consistent
    ///
    /// `positions` must be every position of the word holding the letter.
    #[must_use]
    pub fn admits(&self, positions: PositionSet) -> bool {
        self.admits_count(positions.len() as u8)
            && !positions.intersects(self.forbidden)
            && self.required.is_subset(positions)
    }

    /// True when the history says nothing about this letter
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// One [`LetterConstraint`] per alphabet letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintTable {
    letters: [LetterConstraint; ALPHABET_SIZE],
}

impl Default for ConstraintTable {
    fn default() -> Self {
        Self {
            letters: [LetterConstraint::default(); ALPHABET_SIZE],
        }
    }
}

impl ConstraintTable {
    /// Fold every history entry, in order, into a fresh table
    ///
    /// Within each entry positions are processed left to right. For the letter
    /// at each position, with `n` its number of `Correct`/`Misplaced` positions
    /// in that same entry:
    /// - the first `Incorrect` seen for a letter fixes its exact count to `n`,
    ///   and when `n` is zero forbids the letter everywhere;
    /// - otherwise the minimum count is raised to `n`;
    /// - `Misplaced` forbids the letter at that position, `Correct` requires it.
    ///
    /// # Examples
    /// ```
    /// use sixle::core::{History, Word};
    /// use sixle::solver::ConstraintTable;
    ///
    /// let mut history = History::new();
    /// history.record(Word::new("effort").unwrap(), &Word::new("affect").unwrap());
    ///
    /// let table = ConstraintTable::derive(&history);
    /// assert_eq!(table.get(b'o').exact_count, Some(0));
    /// assert_eq!(table.get(b'f').min_count, 2);
    /// assert!(table.get(b'e').forbidden.contains(0));
    /// ```
    #[must_use]
    pub fn derive(history: &History) -> Self {
        let mut letters = [LetterConstraint::default(); ALPHABET_SIZE];

        for entry in history {
            let guess = entry.guess();
            let feedback = entry.feedback();

            for (position, (&letter, &symbol)) in
                guess.chars().iter().zip(feedback.symbols()).enumerate()
            {
                let hits = feedback.hits_for(guess, letter);
                let constraint = &mut letters[letter_index(letter)];

                if constraint.exact_count.is_none() && symbol == FeedbackSymbol::Incorrect {
                    trace!(
                        "'{}' pinned to exactly {hits} by {guess}",
                        letter as char
                    );
                    constraint.exact_count = Some(hits);
                    if hits == 0 {
                        constraint.forbidden = PositionSet::ALL;
                    }
                } else {
                    constraint.min_count = constraint.min_count.max(hits);
                }

                match symbol {
                    FeedbackSymbol::Misplaced => constraint.forbidden.insert(position),
                    FeedbackSymbol::Correct => constraint.required.insert(position),
                    FeedbackSymbol::Incorrect | FeedbackSymbol::Unseen => {}
                }
            }
        }

        Self { letters }
    }

    /// Constraint for a lowercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> &LetterConstraint {
        &self.letters[letter_index(letter)]
    }

    /// Every letter with its constraint, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &LetterConstraint)> {
        ALPHABET.iter().copied().zip(self.letters.iter())
    }

    /// Letters the history says something about
    pub fn constrained(&self) -> impl Iterator<Item = (u8, &LetterConstraint)> {
        self.iter().filter(|(_, c)| !c.is_unconstrained())
    }
}

/// Derive the constraint table for `history`; see [`ConstraintTable::derive`]
#[must_use]
pub fn derive(history: &History) -> ConstraintTable {
    ConstraintTable::derive(history)
}
