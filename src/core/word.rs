//! Six-letter word representation
//!
//! A Word stores a validated lowercase word along with its letter bytes.

use std::fmt;

/// Number of letters in every word of the puzzle
pub const LENGTH: usize = 6;

/// Size of the fixed lowercase alphabet
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet, in index order
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of a lowercase letter within [`ALPHABET`]
///
/// Callers must pass a byte in `b'a'..=b'z'`; every `Word` guarantees this.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A six-letter puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only lowercase letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is taken as-is: uppercase input is rejected rather than folded, so
    /// callers that accept free-form text should lowercase it first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6
    /// - Contains non-ASCII characters
    /// - Contains anything other than `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use sixle::core::Word;
    ///
    /// let word = Word::new("affect").unwrap();
    /// assert_eq!(word.text(), "affect");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("Affect").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.len() != LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-5)
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Occurrence count of every alphabet letter, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("affect").unwrap();
        assert_eq!(word.text(), "affect");
        assert_eq!(word.chars(), b"affect");
    }

    #[test]
    fn word_creation_rejects_uppercase() {
        assert_eq!(Word::new("AFFECT"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("aFfect"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolonger"),
            Err(WordError::InvalidLength(9))
        ));
        assert!(matches!(Word::new("crane"), Err(WordError::InvalidLength(5))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("affec7").is_err());
        assert!(Word::new("affec ").is_err());
        assert!(Word::new("affec!").is_err());
    }

    #[test]
    fn word_creation_non_ascii() {
        // "cafés" is six bytes but not ASCII
        assert_eq!(Word::new("cafés"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("effort").unwrap();
        assert_eq!(word.char_at(0), b'e');
        assert_eq!(word.char_at(1), b'f');
        assert_eq!(word.char_at(5), b't');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("affect").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'a')], 1);
        assert_eq!(counts[letter_index(b'f')], 2);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), LENGTH);
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'z'), 25);
        assert_eq!(ALPHABET[letter_index(b'q')], b'q');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "uproar".parse().unwrap();
        assert_eq!(format!("{word}"), "uproar");
    }
}
