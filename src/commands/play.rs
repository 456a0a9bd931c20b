//! Interactive play
//!
//! Rounds against a hidden answer, read line by line from any `BufRead` so the
//! loop can be driven by stdin or by a test.

use crate::core::{History, Word};
use crate::game::{AnswerPicker, GameConfig, Keyboard, Round, RoundStatus, Stats};
use crate::output::formatters::{feedback_row, keyboard_rows, spaced_word};
use crate::solver::{Solver, Strategy};
use anyhow::{Result, bail};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

const HELP: &str = "Ah, you need help? Unfortunate.
Type a six letter word to guess it, or one of:
  k  show the keyboard
  a  ask for a suggestion
  h  show this help
  q  quit";

/// What the player typed at the guess prompt
enum Input {
    Quit,
    Help,
    Keyboard,
    Suggest,
    Guess(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "q" => Self::Quit,
            "h" => Self::Help,
            "k" => Self::Keyboard,
            "a" => Self::Suggest,
            _ => Self::Guess(line),
        }
    }
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Write every guess so far, letters spaced above their feedback
pub fn write_history<W: Write>(out: &mut W, history: &History) -> Result<()> {
    let rule = "-".repeat(15);
    for (i, entry) in history.iter().enumerate() {
        writeln!(out, "{rule}")?;
        writeln!(out, "Guess {}:  {}", i + 1, spaced_word(entry.guess()))?;
        writeln!(out, "{}{}", " ".repeat(9), feedback_row(entry.feedback()))?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &Keyboard) -> Result<()> {
    writeln!(out, "\nKeyboard information")?;
    writeln!(out, "{}", "-".repeat(12))?;
    for row in keyboard_rows(keyboard, 2) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> Result<()> {
    writeln!(out, "\nGames won in:")?;
    for (guesses, rounds) in stats.distribution() {
        writeln!(out, "{guesses} moves: {rounds}")?;
    }
    writeln!(out, "Games lost: {}", stats.losses())?;
    Ok(())
}

/// How a single round ended
enum RoundEnd {
    Finished(RoundStatus),
    Quit,
}

fn play_round<S, R, W>(
    solver: &Solver<S>,
    answer: &Word,
    config: GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<RoundEnd>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let mut round = Round::new(answer.clone(), solver.vocabulary(), config);

    while !round.status().is_over() {
        prompt(out, &format!("Enter guess {}: ", round.guess_number()))?;
        let Some(line) = read_line(input)? else {
            return Ok(RoundEnd::Quit);
        };

        match Input::parse(&line) {
            Input::Quit => return Ok(RoundEnd::Quit),
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Keyboard => write_keyboard(out, &Keyboard::from_history(round.history()))?,
            Input::Suggest => match solver.next_guess(round.history()) {
                Some(word) => writeln!(out, "{word}")?,
                None => writeln!(out, "No word fits the feedback so far")?,
            },
            Input::Guess(guess) => match round.submit(&guess) {
                Ok(_) => write_history(out, round.history())?,
                Err(e) => writeln!(out, "Invalid! {e}")?,
            },
        }
    }

    Ok(RoundEnd::Finished(round.status()))
}

/// Play rounds until the player quits, declines a replay or answers run out
///
/// Each round's answer is drawn from `answers` without repeats; guesses are
/// checked against the solver's vocabulary. End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if `answers` is empty or reading/writing fails.
pub fn run_play<S, G, R, W>(
    solver: &Solver<S>,
    answers: &[Word],
    config: GameConfig,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Stats>
where
    S: Strategy,
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    if answers.is_empty() {
        bail!("no answers to play with");
    }

    let mut picker = AnswerPicker::new(answers);
    let mut stats = Stats::new(config.max_guesses);

    loop {
        let Some(answer) = picker.pick(rng) else {
            writeln!(out, "You have played every answer!")?;
            break;
        };

        let status = match play_round(solver, answer, config, input, out)? {
            RoundEnd::Finished(status) => status,
            RoundEnd::Quit => break,
        };

        match status {
            RoundStatus::Won { guesses } => {
                writeln!(out, "Correct! You won in {guesses} guesses!")?;
            }
            _ => writeln!(out, "You lose! The answer was: {answer}")?,
        }
        stats.record(status);
        info!("{} rounds played", stats.rounds_played());
        write_stats(out, &stats)?;

        prompt(out, "Would you like to play again (y/n)? ")?;
        let again = read_line(input)?;
        if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
            break;
        }
    }

    Ok(stats)
}
