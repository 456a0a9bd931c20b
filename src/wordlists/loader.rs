//! Word list loading utilities
//!
//! Custom lists come from plain text files; the embedded ones are converted
//! with [`words_from_slice`].

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// Entries are trimmed and lowercased. Blank lines, entries that are not six
/// ASCII letters and repeats of an earlier entry are skipped, so the result
/// keeps file order without duplicates.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use sixle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/vocab.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = parse_words(&fs::read_to_string(path)?);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line.to_ascii_lowercase()).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use sixle::wordlists::loader::words_from_slice;
/// use sixle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["affect", "effort", "uproar"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "affect");
        assert_eq!(words[1].text(), "effort");
        assert_eq!(words[2].text(), "uproar");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["affect", "toolonger", "abc", "uproar"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "affect");
        assert_eq!(words[1].text(), "uproar");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_skips_blank_and_trims() {
        let words = parse_words("  affect \n\n effort\nbad1st\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["affect", "effort"]);
    }

    #[test]
    fn parse_words_lowercases_and_drops_repeats() {
        let words = parse_words("Uproar\naffect\nUPROAR\nuproar\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["uproar", "affect"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_vocab() {
        use crate::wordlists::VOCAB;

        let words = words_from_slice(VOCAB);
        assert_eq!(words.len(), VOCAB.len());
    }
}
