//! Word solving command
//!
//! Plays a known target with the solver and returns the solution path.

use crate::core::{Feedback, History, Word, WordError};
use crate::game::MAX_GUESSES;
use crate::solver::{Solver, Strategy};
use log::info;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver and strategy
///
/// The solver stops early, unsuccessfully, when no candidate is left; that
/// happens when the target is not in the solver's vocabulary.
///
/// # Errors
///
/// Returns an error if the target word is not six lowercase letters.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, WordError> {
    let target_word = Word::new(config.target.as_str())?;

    let mut history = History::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let Some(guess) = solver.next_guess(&history) else {
            break;
        };

        let feedback = history.record(guess.clone(), &target_word);
        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_perfect() {
            info!("solved {} in {}", config.target, guesses.len());
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    info!("failed to solve {} in {}", config.target, guesses.len());
    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
