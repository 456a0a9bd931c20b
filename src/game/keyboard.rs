//! Keyboard display state
//!
//! Summarises, per letter, the best feedback the player has seen for it.

use crate::core::{ALPHABET, ALPHABET_SIZE, FeedbackSymbol, History, letter_index};

/// Best known feedback for every letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    keys: [FeedbackSymbol; ALPHABET_SIZE],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            keys: [FeedbackSymbol::Unseen; ALPHABET_SIZE],
        }
    }
}

impl Keyboard {
    /// Build the keyboard from every guess so far
    ///
    /// Letters start `Unseen`. Each guessed position overwrites its letter's
    /// state, except that `Correct` is final and `Misplaced` is never
    /// downgraded to `Incorrect`.
    ///
    /// # Examples
    /// ```
    /// use sixle::core::{FeedbackSymbol, History, Word};
    /// use sixle::game::Keyboard;
    ///
    /// let mut history = History::new();
    /// history.record(Word::new("effort").unwrap(), &Word::new("affect").unwrap());
    ///
    /// let keyboard = Keyboard::from_history(&history);
    /// assert_eq!(keyboard.get(b'f'), FeedbackSymbol::Correct);
    /// assert_eq!(keyboard.get(b'o'), FeedbackSymbol::Incorrect);
    /// assert_eq!(keyboard.get(b'z'), FeedbackSymbol::Unseen);
    /// ```
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let mut keyboard = Self::default();

        for entry in history {
            for (&letter, &symbol) in entry.guess().chars().iter().zip(entry.feedback().symbols())
            {
                let key = &mut keyboard.keys[letter_index(letter)];
                let keep = *key == FeedbackSymbol::Correct
                    || (*key == FeedbackSymbol::Misplaced && symbol == FeedbackSymbol::Incorrect);
                if !keep {
                    *key = symbol;
                }
            }
        }

        keyboard
    }

    /// State of a lowercase letter
    #[must_use]
    pub const fn get(&self, letter: u8) -> FeedbackSymbol {
        self.keys[letter_index(letter)]
    }

    /// Every letter with its state, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, FeedbackSymbol)> + '_ {
        ALPHABET
            .iter()
            .zip(self.keys.iter())
            .map(|(&letter, &symbol)| (letter as char, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_history_all_unseen() {
        let keyboard = Keyboard::from_history(&History::new());
        assert!(keyboard.iter().all(|(_, s)| s == FeedbackSymbol::Unseen));
        assert_eq!(keyboard.iter().count(), ALPHABET_SIZE);
    }

    #[test]
    fn correct_is_never_overwritten() {
        let history: History = [
            (word("effort"), Feedback::parse("XGXXXX").unwrap()),
            (word("buffer"), Feedback::parse("XXYXXX").unwrap()),
        ]
        .into_iter()
        .collect();

        assert_eq!(Keyboard::from_history(&history).get(b'f'), FeedbackSymbol::Correct);
    }

    #[test]
    fn misplaced_not_downgraded_to_incorrect() {
        // TEETHE vs LETTER: second E is misplaced, last E incorrect
        let mut history = History::new();
        history.record(word("teethe"), &word("letter"));

        let keyboard = Keyboard::from_history(&history);
        // E at 1 is correct, so E shows correct
        assert_eq!(keyboard.get(b'e'), FeedbackSymbol::Correct);
        assert_eq!(keyboard.get(b'h'), FeedbackSymbol::Incorrect);

        let history: History = [(word("eeabcd"), Feedback::parse("YXXXXX").unwrap())]
            .into_iter()
            .collect();
        assert_eq!(
            Keyboard::from_history(&history).get(b'e'),
            FeedbackSymbol::Misplaced
        );
    }

    #[test]
    fn misplaced_upgrades_to_correct() {
        let history: History = [
            (word("effort"), Feedback::parse("YXXXXX").unwrap()),
            (word("affect"), Feedback::parse("XXXGXX").unwrap()),
        ]
        .into_iter()
        .collect();

        assert_eq!(Keyboard::from_history(&history).get(b'e'), FeedbackSymbol::Correct);
    }

    #[test]
    fn incorrect_can_become_misplaced() {
        let history: History = [(word("eeabcd"), Feedback::parse("XYXXXX").unwrap())]
            .into_iter()
            .collect();
        assert_eq!(
            Keyboard::from_history(&history).get(b'e'),
            FeedbackSymbol::Misplaced
        );
    }
}
