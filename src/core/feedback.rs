//! Per-letter feedback for a guess
//!
//! Each of the six positions of a guess is scored as one [`FeedbackSymbol`]:
//! - `Correct`: the letter sits at this position in the answer
//! - `Misplaced`: the letter occurs elsewhere in the answer
//! - `Incorrect`: the letter is absent, or all its occurrences are already accounted for
//! - `Unseen`: display-only state for letters nothing has touched yet

use super::word::{ALPHABET_SIZE, LENGTH, Word, letter_index};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Correct,
    Misplaced,
    Incorrect,
    /// Never produced by scoring; used for keyboard display
    Unseen,
}

impl FeedbackSymbol {
    /// Emoji square used when rendering this symbol
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬛',
            Self::Unseen => '⬜',
        }
    }

    /// Parse a scored symbol from user input
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for misplaced
    /// - 'X'/'x'/'-'/'_'/⬛ for incorrect
    ///
    /// `Unseen` has no input form.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            'X' | 'x' | '-' | '_' | '⬛' => Some(Self::Incorrect),
            _ => None,
        }
    }

    /// True for `Correct` and `Misplaced`: the letter is proven present
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced)
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have exactly {LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use G, Y or X)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; LENGTH]);

impl Feedback {
    /// All correct (the guess was the answer)
    pub const PERFECT: Self = Self([FeedbackSymbol::Correct; LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// Duplicate letters are resolved with a per-letter count of answer
    /// occurrences not yet consumed.
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is `Correct` and consumes one occurrence
    /// 2. Second pass, left to right: a remaining position is `Misplaced` if an
    ///    unconsumed occurrence of its letter is left (consuming it), else `Incorrect`
    ///
    /// # Examples
    /// ```
    /// use sixle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("effort").unwrap();
    /// let answer = Word::new("affect").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "🟨🟩🟩⬛⬛🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [FeedbackSymbol::Incorrect; LENGTH];
        let mut available: [u8; ALPHABET_SIZE] = answer.letter_counts();

        // Allow: Index needed to compare guess[i], answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..LENGTH {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                result[i] = FeedbackSymbol::Correct;
                available[letter_index(letter)] -= 1;
            }
        }

        // Allow: Index needed to check and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..LENGTH {
            if result[i] == FeedbackSymbol::Correct {
                continue;
            }
            let remaining = &mut available[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                result[i] = FeedbackSymbol::Misplaced;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// The symbols, in position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; LENGTH] {
        &self.0
    }

    /// The symbol at `position`
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Check if every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions where `guess` placed `letter` and scored a hit
    ///
    /// This is how many occurrences of `letter` the feedback proves present.
    #[must_use]
    pub fn hits_for(&self, guess: &Word, letter: u8) -> u8 {
        guess
            .chars()
            .iter()
            .zip(&self.0)
            .filter(|&(&ch, symbol)| ch == letter && symbol.is_hit())
            .count() as u8
    }

    /// Parse feedback from a string like "GYXXGY" or "🟩🟨⬛⬛🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the input does not hold exactly six valid symbols.
    ///
    /// # Examples
    /// ```
    /// use sixle::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-xGy").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬛⬛🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// assert!(Feedback::parse("GYG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Incorrect; LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = FeedbackSymbol::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_emoji())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Score `guess` against `answer`; see [`Feedback::calculate`]
#[inline]
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Feedback {
    Feedback::calculate(guess, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackSymbol::{Correct as C, Incorrect as I, Misplaced as M};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert!(Feedback::PERFECT.symbols().iter().all(|&s| s == C));
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for text in ["affect", "effort", "uproar", "bubble", "voodoo"] {
            let w = word(text);
            assert_eq!(score(&w, &w), Feedback::PERFECT);
        }
    }

    #[test]
    fn disjoint_letters_all_incorrect() {
        let feedback = score(&word("abcdef"), &word("ghijkl"));
        assert_eq!(feedback.symbols(), &[I; LENGTH]);
    }

    #[test]
    fn effort_against_affect() {
        let feedback = score(&word("effort"), &word("affect"));
        assert_eq!(feedback.symbols(), &[M, C, C, I, I, C]);
    }

    #[test]
    fn duplicate_guess_letter_prefers_exact_match() {
        // AFFECT has one E, at position 3; the E at 0 must not take it
        let feedback = score(&word("effete"), &word("affect"));
        assert_eq!(feedback.symbols(), &[I, C, C, C, M, I]);
    }

    #[test]
    fn duplicate_letters_capped_by_answer_count() {
        // LETTER has two E's and two T's
        let feedback = score(&word("teethe"), &word("letter"));
        assert_eq!(feedback.symbols(), &[M, C, M, C, I, I]);

        let guess = word("teethe");
        assert_eq!(feedback.hits_for(&guess, b'e'), 2);
        assert_eq!(feedback.hits_for(&guess, b't'), 2);
    }

    #[test]
    fn repeated_answer_letter_both_found() {
        // UPROAR has R at 2 and 5
        let feedback = score(&word("rather"), &word("uproar"));
        assert_eq!(feedback.symbols(), &[M, M, I, I, I, C]);
    }

    #[test]
    fn hits_never_exceed_answer_count() {
        let pairs = [
            ("bubble", "babble"),
            ("voodoo", "cocoon"),
            ("teethe", "settle"),
            ("papaya", "pepper"),
        ];
        for (g, a) in pairs {
            let (guess, answer) = (word(g), word(a));
            let feedback = score(&guess, &answer);
            for &letter in guess.chars() {
                assert!(
                    feedback.hits_for(&guess, letter) <= answer.letter_counts()[letter_index(letter)],
                    "{g} vs {a}: too many hits for '{}'",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let f1 = Feedback::parse("GYXXGY").unwrap();
        let f2 = Feedback::parse("🟩🟨⬛⬛🟩🟨").unwrap();
        let f3 = Feedback::parse("gy-_gy").unwrap();
        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.symbols(), &[C, M, I, I, C, M]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Feedback::parse("GYG"), Err(FeedbackError::InvalidLength(3)));
        assert_eq!(
            Feedback::parse("GYXXGYG"),
            Err(FeedbackError::InvalidLength(7))
        );
        assert_eq!(
            Feedback::parse("GYXXGZ"),
            Err(FeedbackError::InvalidSymbol('Z'))
        );
        assert_eq!(
            Feedback::parse("⬜⬜⬜⬜⬜⬜"),
            Err(FeedbackError::InvalidSymbol('⬜'))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let feedback = score(&word("effort"), &word("affect"));
        let shown = feedback.to_string();
        assert_eq!(shown, "🟨🟩🟩⬛⬛🟩");
        assert_eq!(Feedback::parse(&shown).unwrap(), feedback);
    }
}
