//! Random answer selection without repeats

use crate::core::Word;
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Draws answers at random, never the same one twice in a session
#[derive(Debug, Clone)]
pub struct AnswerPicker<'a> {
    answers: &'a [Word],
    used: FxHashSet<&'a Word>,
}

impl<'a> AnswerPicker<'a> {
    #[must_use]
    pub fn new(answers: &'a [Word]) -> Self {
        Self {
            answers,
            used: FxHashSet::default(),
        }
    }

    /// Pick an answer not used before in this session
    ///
    /// Returns `None` once every answer has been used.
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a Word> {
        let unused: Vec<&'a Word> = self
            .answers
            .iter()
            .filter(|w| !self.used.contains(w))
            .collect();

        let answer = *unused.choose(rng)?;
        self.used.insert(answer);
        debug!("picked answer {} of {} unused", answer, unused.len());
        Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn never_repeats_and_exhausts() {
        let answers = words_from_slice(&["affect", "effort", "uproar"]);
        let mut picker = AnswerPicker::new(&answers);
        let mut rng = rand::rng();

        let mut seen = FxHashSet::default();
        for _ in 0..answers.len() {
            let answer = picker.pick(&mut rng).unwrap();
            assert!(seen.insert(answer.text().to_string()), "repeated {answer}");
        }

        assert!(picker.pick(&mut rng).is_none());
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_answer_list() {
        let answers: Vec<Word> = Vec::new();
        let mut picker = AnswerPicker::new(&answers);
        assert!(picker.pick(&mut rand::rng()).is_none());
    }
}
