//! Letter-frequency suggestion heuristic
//!
//! Favours words made of common English letters while penalising repeated
//! letters. Cheap and approximate: no information-gain computation.
//!
//! Weights are English letter frequencies in percent, stored as integers
//! scaled by [`WEIGHT_SCALE`]. Every half weight stays whole, so scores are
//! exact and equal scores compare equal.

use crate::core::{ALPHABET_SIZE, Word};

/// Factor between a stored weight and its frequency in percent
pub const WEIGHT_SCALE: i64 = 2000;

/// English letter frequency in percent × [`WEIGHT_SCALE`], indexed a-z
pub const LETTER_WEIGHTS: [i64; ALPHABET_SIZE] = [
    16_400, // a  8.2
    3_000,  // b  1.5
    5_400,  // c  2.7
    9_400,  // d  4.7
    26_000, // e 13.0
    4_400,  // f  2.2
    4_000,  // g  2.0
    12_400, // h  6.2
    13_800, // i  6.9
    320,    // j  0.16
    1_620,  // k  0.81
    8_000,  // l  4.0
    5_400,  // m  2.7
    13_400, // n  6.7
    15_600, // o  7.8
    3_800,  // p  1.9
    220,    // q  0.11
    11_800, // r  5.9
    12_400, // s  6.2
    19_200, // t  9.6
    5_400,  // u  2.7
    1_940,  // v  0.97
    4_800,  // w  2.4
    300,    // x  0.15
    4_000,  // y  2.0
    156,    // z  0.078
];

/// Heuristic score of a word, in units of 1 / [`WEIGHT_SCALE`] percent
///
/// Each position contributes `w - w / 2 × n`, where `w` is the letter's weight
/// and `n` its number of occurrences in the word. A letter seen once adds half
/// its weight, twice adds nothing, three times or more subtracts.
///
/// # Examples
/// ```
/// use sixle::core::Word;
/// use sixle::solver::{WEIGHT_SCALE, frequency_score};
///
/// let diverse = Word::new("effort").unwrap();
/// let repetitive = Word::new("voodoo").unwrap();
/// assert!(frequency_score(&diverse) > frequency_score(&repetitive));
/// assert_eq!(frequency_score(&diverse) as f64 / WEIGHT_SCALE as f64, 18.15);
/// ```
#[must_use]
pub fn frequency_score(word: &Word) -> i64 {
    word.letter_counts()
        .iter()
        .zip(LETTER_WEIGHTS)
        .filter(|&(&count, _)| count > 0)
        .map(|(&count, weight)| {
            let n = i64::from(count);
            n * (weight - weight / 2 * n)
        })
        .sum()
}

/// Candidate with the strictly highest score; earliest wins ties
#[must_use]
pub fn best_by_frequency<'a>(candidates: &[&'a Word]) -> Option<(&'a Word, i64)> {
    let mut best: Option<(&'a Word, i64)> = None;

    for &candidate in candidates {
        let score = frequency_score(candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best
}
