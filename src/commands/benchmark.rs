//! Benchmark command
//!
//! Plays a full game against every answer-eligible word and collects the
//! number of tries. The first guesses depend only on the clues seen so far,
//! so rankings for the first two turns are cached across games.

use crate::core::{Clue, Word};
use crate::game::Difficulty;
use crate::solver::{ScoringKind, Solver};
use crate::vocabulary::Vocabulary;
use anyhow::{Context, Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

/// Tries before a game is given up
pub const MAX_TRIES: usize = 20;

/// Clue histories up to this many steps share their next guess
const CACHE_DEPTH: usize = 2;

/// Benchmark settings
#[derive(Debug, Clone, Default)]
pub struct BenchmarkOptions {
    pub strategy: ScoringKind,
    pub difficulty: Difficulty,
    /// Only play the first `limit` answers
    pub limit: Option<usize>,
    /// Opening guess to use instead of the top-ranked one
    pub first_guess: Option<String>,
    pub show_progress: bool,
}

/// One game of the benchmark, as written to the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub tries: usize,
    /// `[word, score, [marks...]]` per guess
    pub guesses: Vec<(String, f64, Vec<u8>)>,
}

/// Games keyed by answer
pub type BenchmarkLog = BTreeMap<String, GameLog>;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
    pub log: BenchmarkLog,
}

type GuessCache<'a> = FxHashMap<Vec<Clue>, (&'a Word, f64)>;

/// Run the benchmark over the answer-eligible words of `vocabulary`
///
/// # Errors
///
/// Returns an error if the forced first guess is not in the vocabulary, or
/// if a game runs out of candidates.
pub fn run_benchmark(vocabulary: &Vocabulary, options: &BenchmarkOptions) -> Result<BenchmarkResult> {
    let first_guess = options
        .first_guess
        .as_deref()
        .map(|text| -> Result<&Word> {
            let word = Word::new(text).with_context(|| format!("invalid first guess \"{text}\""))?;
            vocabulary
                .get(word.text())
                .map(|entry| &entry.word)
                .ok_or_else(|| anyhow!("first guess \"{text}\" is not in the word list"))
        })
        .transpose()?;

    let answers: Vec<&Word> = vocabulary
        .answers()
        .map(|entry| &entry.word)
        .take(options.limit.unwrap_or(usize::MAX))
        .collect();
    info!(
        "benchmarking {} answers with {} ({})",
        answers.len(),
        options.strategy,
        options.difficulty
    );

    let pb = if options.show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut cache = GuessCache::default();
    let mut log = BenchmarkLog::new();
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;

    for (idx, &answer) in answers.iter().enumerate() {
        let game = play_game(vocabulary, answer, options, first_guess, &mut cache)?;

        if game.solved {
            total_guesses += game.log.tries;
            *distribution.entry(game.log.tries).or_insert(0) += 1;
        } else {
            warn!("{answer} not solved in {MAX_TRIES} tries");
            failures.push(answer.text().to_string());
        }
        log.insert(answer.text().to_string(), game.log);

        if idx % 10 == 0 && total_guesses > 0 {
            let solved: usize = distribution.values().sum();
            pb.set_message(format!("Avg: {:.3}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    debug!("{} cached rankings", cache.len());

    let solved: usize = distribution.values().sum();
    let total_words = answers.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        log,
    })
}

struct Game {
    solved: bool,
    log: GameLog,
}

fn play_game<'a>(
    vocabulary: &'a Vocabulary,
    answer: &Word,
    options: &BenchmarkOptions,
    first_guess: Option<&'a Word>,
    cache: &mut GuessCache<'a>,
) -> Result<Game> {
    let hard = options.difficulty.is_hard();
    let mut solver = Solver::new(vocabulary, options.strategy);
    let mut guesses = Vec::new();

    while guesses.len() < MAX_TRIES {
        let (guess, score) = match first_guess {
            Some(forced) if solver.clues().is_empty() => {
                let score = if hard {
                    solver.scoreh(forced)?
                } else {
                    solver.score(forced)?
                };
                (forced, score)
            }
            _ => next_guess(&solver, hard, cache)
                .with_context(|| format!("playing \"{answer}\""))?,
        };

        let clue = Clue::from_compare(guess, answer)?;
        guesses.push((guess.text().to_string(), score, clue.signal().codes()));
        let solved = clue.is_solved();
        solver.add_clue(clue)?;

        if solved {
            return Ok(Game {
                solved: true,
                log: GameLog {
                    tries: guesses.len(),
                    guesses,
                },
            });
        }
    }

    Ok(Game {
        solved: false,
        log: GameLog {
            tries: guesses.len(),
            guesses,
        },
    })
}

fn next_guess<'a>(solver: &Solver<'a>, hard: bool, cache: &mut GuessCache<'a>) -> Result<(&'a Word, f64)> {
    let cacheable = solver.clues().len() <= CACHE_DEPTH;
    if cacheable && let Some(&hit) = cache.get(solver.clues()) {
        return Ok(hit);
    }

    let ranked = if hard { solver.besth(1) } else { solver.best(1) };
    let Some(&best) = ranked.first() else {
        bail!("no candidates left after {} clues", solver.clues().len());
    };

    if cacheable {
        cache.insert(solver.clues().to_vec(), best);
    }
    Ok(best)
}

/// Write the per-game log as JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_log(path: &Path, log: &BenchmarkLog) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), log)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} games to {}", log.len(), path.display());
    Ok(())
}
