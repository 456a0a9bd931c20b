//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row, spaced_word};
use crate::commands::{BenchmarkResult, SolveResult, SuggestResult};
use crate::solver::ConstraintTable;
use colored::Colorize;

/// Candidates listed in full up to this many
const CANDIDATE_PREVIEW: usize = 10;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_row(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

fn print_constraints(constraints: &ConstraintTable) {
    for (letter, c) in constraints.constrained() {
        let count = c.exact_count.map_or_else(
            || format!(">= {}", c.min_count),
            |exact| format!("== {exact}"),
        );
        println!(
            "   {}  count {count:<6} at {:<14} not at {}",
            (letter as char).to_string().bright_yellow().bold(),
            c.required.to_string(),
            c.forbidden
        );
    }
}

/// Print what the solver made of a history
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SUGGESTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if !result.history.is_empty() {
        println!("\n📝 {}", "History:".bright_cyan().bold());
        for entry in &result.history {
            println!(
                "   {}  {}",
                spaced_word(entry.guess()),
                feedback_row(entry.feedback())
            );
        }

        println!("\n🔒 {}", "Constraints:".bright_cyan().bold());
        print_constraints(&result.constraints);
    }

    println!(
        "\n📋 {} {}",
        "Candidates:".bright_cyan().bold(),
        result.candidates.len()
    );
    if result.candidates.len() <= CANDIDATE_PREVIEW {
        println!("   {}", result.candidates.join(" "));
    } else {
        println!(
            "   {} ...",
            result.candidates[..CANDIDATE_PREVIEW].join(" ")
        );
    }

    match &result.suggestion {
        Some(word) => println!(
            "\n💡 Suggested guess: {}",
            word.to_uppercase().green().bold()
        ),
        None => println!(
            "\n{}",
            "❌ No word fits the feedback given".red().bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if result.total_words == 0 {
        0.0
    } else {
        result.solved as f64 / result.total_words as f64 * 100.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({success_rate:.1}%)",
        result.solved.to_string().green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut buckets: Vec<_> = result.distribution.iter().collect();
    buckets.sort_unstable();
    for (&guess_count, &count) in buckets {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            result.failed.join(", ")
        );
    }
}
