//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use crate::game::Keyboard;

/// Letters of a word separated by spaces, uppercased: "E F F O R T"
#[must_use]
pub fn spaced_word(word: &Word) -> String {
    let letters: Vec<String> = word
        .text()
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    letters.join(" ")
}

/// Feedback emoji, two columns wide each, so they line up under [`spaced_word`]
#[must_use]
pub fn feedback_row(feedback: &Feedback) -> String {
    feedback.to_string()
}

/// Keyboard as rows of `columns` entries like "a: 🟩"
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard, columns: usize) -> Vec<String> {
    let entries: Vec<String> = keyboard
        .iter()
        .map(|(letter, symbol)| format!("{letter}: {}", symbol.to_emoji()))
        .collect();

    entries
        .chunks(columns.max(1))
        .map(|row| row.join("\t"))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
