//! Word solving command
//!
//! Plays a known target with the configured strategy and records the path.

use crate::core::{Clue, Word};
use crate::game::Difficulty;
use crate::solver::{ScoringKind, Solver};
use crate::vocabulary::Vocabulary;
use anyhow::{Result, bail};
use log::debug;

/// Guesses allowed before a solve is reported as failed
pub const MAX_GUESSES: usize = 20;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub strategy: ScoringKind,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            strategy: ScoringKind::default(),
            difficulty: Difficulty::default(),
            max_guesses: MAX_GUESSES,
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: ScoringKind) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub clue: Clue,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word
///
/// Each turn plays the top-ranked guess (hard-mode ranking on hard
/// difficulty) and feeds the resulting clue back to the solver.
///
/// # Errors
///
/// Returns an error if the target is not a valid word, is not an
/// answer-eligible word of the vocabulary, or the solver runs out of
/// candidates.
pub fn solve_word(config: &SolveConfig, vocabulary: &Vocabulary) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    match vocabulary.get(target.text()) {
        Some(entry) if entry.is_answer() => {}
        Some(_) => bail!("\"{target}\" cannot be an answer"),
        None => bail!("\"{target}\" is not in the word list"),
    }

    let mut solver = Solver::new(vocabulary, config.strategy);
    let mut guesses = Vec::new();

    while guesses.len() < config.max_guesses {
        let candidates_before = solver.candidates().len();
        let ranked = if config.difficulty.is_hard() {
            solver.besth(1)
        } else {
            solver.best(1)
        };
        let Some(&(guess, score)) = ranked.first() else {
            bail!("no candidates left");
        };

        let clue = Clue::from_compare(guess, &target)?;
        solver.add_clue(clue.clone())?;
        debug!("{clue} scored {score:.4}");

        let solved = clue.is_solved();
        guesses.push(GuessStep {
            clue,
            score,
            candidates_before,
            candidates_after: solver.candidates().len(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}
