//! Guess history for one round
//!
//! An append-only, ordered record of every guess and the feedback it received.

use super::{Feedback, Word};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    guess: Word,
    feedback: Feedback,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Ordered guesses of a single round
///
/// Entries are only ever appended; none is removed, reordered or edited.
/// A new round starts from a new `History`. The caller is responsible for
/// pairing each guess with the feedback it actually received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a scored guess in place
    pub fn append(&mut self, guess: Word, feedback: Feedback) {
        self.entries.push(HistoryEntry::new(guess, feedback));
    }

    /// Copy of this history with one more entry; `self` is left untouched
    ///
    /// # Examples
    /// ```
    /// use sixle::core::{Feedback, History, Word};
    ///
    /// let empty = History::new();
    /// let guess = Word::new("effort").unwrap();
    /// let next = empty.appended(guess.clone(), Feedback::PERFECT);
    ///
    /// assert!(empty.is_empty());
    /// assert!(next.contains(&guess));
    /// ```
    #[must_use]
    pub fn appended(&self, guess: Word, feedback: Feedback) -> Self {
        let mut next = self.clone();
        next.append(guess, feedback);
        next
    }

    /// Score `guess` against `answer` and append the result
    ///
    /// Returns the feedback that was recorded.
    pub fn record(&mut self, guess: Word, answer: &Word) -> Feedback {
        let feedback = Feedback::calculate(&guess, answer);
        self.append(guess, feedback);
        feedback
    }

    /// Whether `word` was already guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.guess == *word)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Word, Feedback)> for History {
    fn from_iter<T: IntoIterator<Item = (Word, Feedback)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(guess, feedback)| HistoryEntry::new(guess, feedback))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn append_preserves_order() {
        let mut history = History::new();
        history.append(word("effort"), Feedback::parse("YGGXXG").unwrap());
        history.append(word("affect"), Feedback::PERFECT);

        let guesses: Vec<&str> = history.iter().map(|e| e.guess().text()).collect();
        assert_eq!(guesses, ["effort", "affect"]);
        assert_eq!(history.len(), 2);
        assert!(history.last().unwrap().feedback().is_perfect());
    }

    #[test]
    fn appended_does_not_mutate_original() {
        let original = History::new().appended(word("uproar"), Feedback::parse("XXXXXX").unwrap());
        let extended = original.appended(word("effort"), Feedback::parse("XXXXXX").unwrap());

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(!original.contains(&word("effort")));
        assert!(extended.contains(&word("effort")));
    }

    #[test]
    fn record_scores_against_answer() {
        let mut history = History::new();
        let feedback = history.record(word("effort"), &word("affect"));

        assert_eq!(feedback, Feedback::parse("YGGXXG").unwrap());
        assert_eq!(history.entries()[0].feedback(), &feedback);
    }

    #[test]
    fn contains_only_guessed_words() {
        let mut history = History::new();
        assert!(!history.contains(&word("affect")));

        history.record(word("effort"), &word("affect"));
        assert!(history.contains(&word("effort")));
        assert!(!history.contains(&word("affect")));
    }

    #[test]
    fn earlier_entries_survive_every_append() {
        let mut history = History::new();
        let mut expected = Vec::new();

        for (guess, answer) in [("effort", "affect"), ("uproar", "affect"), ("affect", "affect")] {
            let before = history.clone();
            let feedback = history.record(word(guess), &word(answer));
            expected.push(HistoryEntry::new(word(guess), feedback));

            assert_eq!(history.len(), before.len() + 1);
            assert_eq!(&history.entries()[..before.len()], before.entries());
        }

        assert_eq!(history.entries(), expected.as_slice());
    }
}
