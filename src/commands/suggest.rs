//! Suggestion command
//!
//! Takes the guesses and feedback of a game played elsewhere and reports what
//! the solver makes of them.

use crate::core::{Feedback, History, Word};
use crate::solver::{ConstraintTable, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// What the solver concluded from a history
pub struct SuggestResult {
    pub history: History,
    pub constraints: ConstraintTable,
    pub candidates: Vec<String>,
    pub suggestion: Option<String>,
}

/// Parse one `guess=feedback` argument, e.g. `effort=YGGXXG`
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is malformed.
pub fn parse_entry(arg: &str) -> Result<(Word, Feedback)> {
    let Some((guess, feedback)) = arg.split_once('=') else {
        bail!("expected GUESS=FEEDBACK, got '{arg}'");
    };

    let guess = Word::new(guess.trim().to_lowercase())
        .with_context(|| format!("bad guess in '{arg}'"))?;
    let feedback = Feedback::parse(feedback).with_context(|| format!("bad feedback in '{arg}'"))?;

    Ok((guess, feedback))
}

/// Rebuild the history from `entries` and ask the solver for candidates
///
/// # Errors
///
/// Returns an error if any entry fails to parse.
///
/// # Examples
/// ```
/// use sixle::commands::suggest_from_entries;
/// use sixle::solver::{FrequencyStrategy, Solver};
/// use sixle::wordlists::loader::words_from_slice;
///
/// let vocabulary = words_from_slice(&["affect", "effort", "uproar"]);
/// let solver = Solver::new(FrequencyStrategy, &vocabulary);
///
/// let result = suggest_from_entries(&["effort=YGGXXG".to_string()], &solver).unwrap();
/// assert_eq!(result.candidates, ["affect"]);
/// assert_eq!(result.suggestion.as_deref(), Some("affect"));
/// ```
pub fn suggest_from_entries<S: Strategy>(
    entries: &[String],
    solver: &Solver<S>,
) -> Result<SuggestResult> {
    let history = entries
        .iter()
        .map(|arg| parse_entry(arg))
        .collect::<Result<History>>()?;

    let constraints = solver.constraints(&history);
    let survivors = solver.candidates_under(&history, &constraints);
    let suggestion = solver.choose(&survivors).map(|w| w.text().to_string());
    let candidates = survivors.iter().map(|w| w.text().to_string()).collect();

    Ok(SuggestResult {
        history,
        constraints,
        candidates,
        suggestion,
    })
}
