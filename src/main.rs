//! Wordle Prune - CLI
//!
//! Interactive solver and player, single-word solving, clue comparison and
//! whole-list benchmarking.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_prune::{
    commands::{BenchmarkOptions, SolveConfig, run_benchmark, run_repl, solve_word, write_log},
    config::{Config, DEFAULT_LIST_SIZE, Mode},
    core::{Clue, Word},
    game::Difficulty,
    output::{print_benchmark_result, print_clue, print_solve_result},
    solver::ScoringKind,
};

#[derive(Parser)]
#[command(
    name = "wordle_prune",
    about = "Wordle solver and player with candidate pruning and partition scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start the REPL solving another game or playing against a hidden answer
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Solve)]
    mode: Mode,

    /// Require revealed letters in later guesses
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Keep only words of this length (0 keeps every length)
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Word file: one word per line, optionally with a weight
    #[arg(short = 'w', long = "words", global = true)]
    words: Option<PathBuf>,

    /// Answer-eligible words; the word file then lists every allowed guess
    #[arg(long, global = true, requires = "words")]
    commons: Option<PathBuf>,

    /// Scoring strategy
    #[arg(short, long, global = true, value_enum, default_value_t = ScoringKind::Variance)]
    strategy: ScoringKind,

    /// Entries shown by best, besth and list
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_LIST_SIZE)]
    list_size: usize,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive command loop (default)
    Repl,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(long)]
        details: bool,
    },

    /// Show the clue a guess gets against an answer
    Compare {
        guess: String,
        answer: String,
    },

    /// Play every answer-eligible word and report the tries
    Benchmark {
        /// Write the per-game JSON log here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only play the first N answers
        #[arg(long)]
        limit: Option<usize>,

        /// Opening guess for every game
        #[arg(short = 'f', long)]
        first: Option<String>,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config {
            mode: self.mode,
            difficulty: self.difficulty,
            length: None,
            word_file: self.words.clone(),
            commons_file: self.commons.clone(),
            strategy: self.strategy,
            list_size: self.list_size,
        };
        config.set_length(self.length);
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(config),
        Commands::Solve { word, details } => run_solve_command(&config, &word, details),
        Commands::Compare { guess, answer } => run_compare_command(&guess, &answer),
        Commands::Benchmark {
            output,
            limit,
            first,
        } => run_benchmark_command(&config, output.as_deref(), limit, first),
    }
}

fn run_solve_command(config: &Config, word: &str, details: bool) -> Result<()> {
    let vocabulary = config.load_vocabulary()?;
    let solve = SolveConfig::new(word)
        .with_strategy(config.strategy)
        .with_difficulty(config.difficulty);
    let result = solve_word(&solve, &vocabulary)?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_compare_command(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::new(guess).context("invalid guess")?;
    let answer = Word::new(answer).context("invalid answer")?;
    print_clue(&Clue::from_compare(&guess, &answer)?);
    Ok(())
}

fn run_benchmark_command(
    config: &Config,
    output: Option<&Path>,
    limit: Option<usize>,
    first: Option<String>,
) -> Result<()> {
    let vocabulary = config.load_vocabulary()?;
    let options = BenchmarkOptions {
        strategy: config.strategy,
        difficulty: config.difficulty,
        limit,
        first_guess: first,
        show_progress: true,
    };

    if let Some(word) = &options.first_guess {
        println!(
            "Running benchmark with {} ({}) and forced first word: {word}...",
            options.strategy, options.difficulty
        );
    } else {
        println!(
            "Running benchmark with {} ({})...",
            options.strategy, options.difficulty
        );
    }

    let result = run_benchmark(&vocabulary, &options)?;
    print_benchmark_result(&result);

    if let Some(path) = output {
        write_log(path, &result.log)?;
        println!("\nLog written to {}", path.display());
    }
    Ok(())
}
