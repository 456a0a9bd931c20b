//! Sixle - CLI
//!
//! Play the six-letter word game, or let the solver play and advise.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use sixle::{
    commands::{
        BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_word, suggest_from_entries,
    },
    core::Word,
    game::{GameConfig, MAX_GUESSES},
    output::{print_benchmark_result, print_solve_result, print_suggest_result},
    solver::{Solver, Strategy, StrategyType},
    wordlists::{ANSWERS, VOCAB, loader::words_from_slice},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "sixle",
    about = "Six-letter word game with a constraint-based solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), first, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'all' (default, full vocabulary), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// More log output; repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds against a hidden answer (default)
    Play,

    /// Let the solver play a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        detail: bool,
    },

    /// Suggest a guess from the feedback of a game played elsewhere
    Suggest {
        /// Guesses with their feedback, e.g. effort=YGGXXG
        entries: Vec<String>,
    },

    /// Benchmark solver performance over the answer list
    Benchmark {
        /// Number of answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Load wordlists based on the -w flag
///
/// Returns (`vocabulary`, `answers`)
/// - "all": every accepted word as vocabulary, the answer list as answers
/// - "answers": the answer list for both
/// - "<path>": words from the file for both
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use sixle::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok((words_from_slice(VOCAB), words_from_slice(ANSWERS))),
        "answers" => {
            let answer_words = words_from_slice(ANSWERS);
            Ok((answer_words.clone(), answer_words))
        }
        path => {
            let custom_words = load_from_file(path)
                .with_context(|| format!("failed to load wordlist from {path}"))?;
            if custom_words.is_empty() {
                bail!("wordlist {path} has no six-letter words");
            }
            Ok((custom_words.clone(), custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (vocabulary, answers) = load_wordlists(&cli.wordlist)?;
    info!(
        "{} vocabulary words, {} answers",
        vocabulary.len(),
        answers.len()
    );

    let strategy = StrategyType::from_name(&cli.strategy);
    info!("strategy: {}", strategy.name());
    let solver = Solver::new(strategy, &vocabulary);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play_command(&solver, &answers),
        Commands::Solve { word, detail } => solve_command(&word, detail, &solver),
        Commands::Suggest { entries } => {
            let result = suggest_from_entries(&entries, &solver)?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, first_word } => {
            benchmark_command(count, first_word.as_deref(), &solver, &answers)
        }
    }
}

fn play_command<S: Strategy>(solver: &Solver<S>, answers: &[Word]) -> Result<()> {
    let stdin = io::stdin();
    let stats = run_play(
        solver,
        answers,
        GameConfig::default(),
        &mut rand::rng(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;
    info!("session over after {} rounds", stats.rounds_played());
    Ok(())
}

fn solve_command<S: Strategy>(word: &str, detail: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(word.to_lowercase());
    let result = solve_word(config, solver).with_context(|| format!("cannot solve '{word}'"))?;

    print_solve_result(&result, detail);
    Ok(())
}

fn benchmark_command<S: Strategy + Sync>(
    count: Option<usize>,
    first_word: Option<&str>,
    solver: &Solver<S>,
    answers: &[Word],
) -> Result<()> {
    let count = count.unwrap_or(answers.len());
    let forced_first = first_word
        .map(|w| Word::new(w.to_lowercase()))
        .transpose()
        .context("bad first word")?;

    if let Some(word) = &forced_first {
        println!("Running benchmark on {count} words with forced first word: {word}...");
    } else {
        println!("Running benchmark on {count} words...");
    }

    let test_words: Vec<Word> = answers.iter().take(count).cloned().collect();
    let config = BenchmarkConfig {
        max_guesses: MAX_GUESSES,
        forced_first: forced_first.as_ref(),
        show_progress: true,
    };

    let result = run_benchmark(solver, &test_words, &config);
    print_benchmark_result(&result);
    Ok(())
}
