//! Benchmark command
//!
//! Plays the solver against many answers and reports how many guesses it needs.

use crate::core::{History, Word};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers not found within the guess limit, in input order
    pub failed: Vec<String>,
    /// Guesses taken, for solved answers only
    pub distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Benchmark settings
pub struct BenchmarkConfig<'a> {
    pub max_guesses: usize,
    /// Opening guess used instead of asking the solver
    pub forced_first: Option<&'a Word>,
    pub show_progress: bool,
}

/// Play one round against `target`; returns `(guesses, solved)`
fn play_out<S: Strategy>(
    solver: &Solver<S>,
    target: &Word,
    config: &BenchmarkConfig<'_>,
) -> (usize, bool) {
    let mut history = History::new();

    for turn in 1..=config.max_guesses {
        let guess = match (turn, config.forced_first) {
            (1, Some(forced)) => forced,
            _ => match solver.next_guess(&history) {
                Some(g) => g,
                None => return (turn - 1, false),
            },
        };

        if history.record(guess.clone(), target).is_perfect() {
            return (turn, true);
        }
    }

    (config.max_guesses, false)
}

/// Run benchmark on a set of target words
///
/// Rounds are independent and run in parallel.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[Word],
    config: &BenchmarkConfig<'_>,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(usize, bool)> = target_words
        .par_iter()
        .map(|target| {
            let outcome = play_out(solver, target, config);
            debug!("{target}: {outcome:?}");
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for (target, &(guesses, solved)) in target_words.iter().zip(&outcomes) {
        if solved {
            *distribution.entry(guesses).or_insert(0) += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
        } else {
            failed.push(target.text().to_string());
        }
    }

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failed.len();

    BenchmarkResult {
        total_words,
        solved,
        failed,
        distribution,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::solver::{FirstStrategy, FrequencyStrategy};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{ANSWERS, VOCAB};

    fn config(max_guesses: usize) -> BenchmarkConfig<'static> {
        BenchmarkConfig {
            max_guesses,
            forced_first: None,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let vocabulary = words_from_slice(VOCAB);
        let answers = words_from_slice(&ANSWERS[..20]);

        let solver = Solver::new(FrequencyStrategy, &vocabulary);
        let result = run_benchmark(&solver, &answers, &config(MAX_GUESSES));

        assert_eq!(result.total_words, 20);
        assert_eq!(result.solved + result.failed.len(), 20);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let vocabulary = words_from_slice(VOCAB);
        let answers = words_from_slice(&ANSWERS[..20]);

        let solver = Solver::new(FrequencyStrategy, &vocabulary);
        let result = run_benchmark(&solver, &answers, &config(MAX_GUESSES));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guesses in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guesses));
        }
    }

    #[test]
    fn unlimited_guesses_always_solve() {
        let vocabulary = words_from_slice(VOCAB);
        let answers = words_from_slice(&ANSWERS[..10]);

        let solver = Solver::new(FirstStrategy, &vocabulary);
        let result = run_benchmark(&solver, &answers, &config(vocabulary.len()));

        assert!(result.failed.is_empty());
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn forced_first_word_is_used() {
        let vocabulary = words_from_slice(VOCAB);
        let answers = words_from_slice(&["affect"]);
        let forced = Word::new("affect").unwrap();

        let solver = Solver::new(FrequencyStrategy, &vocabulary);
        let config = BenchmarkConfig {
            max_guesses: MAX_GUESSES,
            forced_first: Some(&forced),
            show_progress: false,
        };
        let result = run_benchmark(&solver, &answers, &config);

        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.min_guesses, 1);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let vocabulary = words_from_slice(VOCAB);
        let answers: Vec<Word> = vec![];

        let solver = Solver::new(FrequencyStrategy, &vocabulary);
        let result = run_benchmark(&solver, &answers, &config(MAX_GUESSES));

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
