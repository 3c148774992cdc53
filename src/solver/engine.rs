//! Solving session
//!
//! Holds the candidate set, the hard-mode letters and the clue history of
//! one game, and ranks guesses against the current candidates.

use super::{CandidateSet, HardModeFilter, Scorer, ScoringKind};
use crate::core::{Clue, Word};
use crate::error::{ClueError, SolverError};
use crate::vocabulary::{Vocabulary, WeightedWord};
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;

/// Where a solving session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No clue applied yet
    Initial,
    /// Clues applied, answer not confirmed
    Narrowing,
    /// An all-green clue was received
    Solved,
    /// No candidate is consistent with the clues
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initial => "initial",
            Self::Narrowing => "narrowing",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        })
    }
}

/// Wordle solver
///
/// # Examples
/// ```
/// use wordle_prune::core::{Clue, Word};
/// use wordle_prune::solver::{ScoringKind, SessionState, Solver};
/// use wordle_prune::vocabulary::Vocabulary;
///
/// let vocabulary = Vocabulary::from_words(["crane", "grate", "irate", "slate"]).unwrap();
/// let mut solver = Solver::new(&vocabulary, ScoringKind::Variance);
///
/// let clue = Clue::new(Word::new("crane").unwrap(), "02202".parse().unwrap()).unwrap();
/// assert_eq!(solver.add_clue(clue).unwrap(), SessionState::Narrowing);
/// assert_eq!(solver.list().len(), 2);
///
/// let best = solver.best(1);
/// assert_eq!(best[0].0.text(), "grate");
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    vocabulary: &'a Vocabulary,
    candidates: CandidateSet<'a>,
    hard_mode: HardModeFilter,
    scorer: Scorer,
    clues: Vec<Clue>,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, kind: ScoringKind) -> Self {
        Self {
            vocabulary,
            candidates: CandidateSet::new(vocabulary),
            hard_mode: HardModeFilter::new(),
            scorer: kind.scorer(),
            clues: Vec::new(),
        }
    }

    /// Forget every clue
    pub fn reset(&mut self) {
        self.candidates.reset();
        self.hard_mode.reset();
        self.clues.clear();
        debug!("solver reset, {} candidates", self.candidates.len());
    }

    /// Apply a clue to the candidate set and the hard-mode letters
    ///
    /// # Errors
    /// Returns `SolverError::Clue` for an unknown word or a signal of the
    /// wrong length, leaving the session untouched. Returns
    /// `SolverError::Contradiction` when no candidate survives; the clue is
    /// still recorded and the session stays exhausted until [`Solver::reset`].
    pub fn add_clue(&mut self, clue: Clue) -> Result<SessionState, SolverError> {
        let before = self.candidates.len();
        self.candidates = self.candidates.narrowed(&clue)?;
        self.hard_mode.add_clue(&clue);
        debug!(
            "{clue}: {before} -> {} candidates",
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            warn!("no candidates left after {clue}");
            self.clues.push(clue.clone());
            return Err(SolverError::Contradiction { clue });
        }

        self.clues.push(clue);
        Ok(self.state())
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.clues.is_empty() {
            SessionState::Initial
        } else if self.candidates.is_empty() {
            SessionState::Exhausted
        } else if self.clues.iter().any(Clue::is_solved) {
            SessionState::Solved
        } else {
            SessionState::Narrowing
        }
    }

    /// Up to `n` guesses from the whole vocabulary, best first
    ///
    /// `n == 0` returns every word. With a single candidate left only that
    /// candidate is returned; with none, nothing.
    #[must_use]
    pub fn best(&self, n: usize) -> Vec<(&'a Word, f64)> {
        let guesses: Vec<&'a Word> = self.vocabulary.iter().map(|e| &e.word).collect();
        self.rank(&guesses, n, false)
    }

    /// Like [`Solver::best`], restricted to guesses allowed in hard mode
    #[must_use]
    pub fn besth(&self, n: usize) -> Vec<(&'a Word, f64)> {
        let guesses: Vec<&'a Word> = self
            .hard_mode
            .filter(self.vocabulary.iter().map(|e| &e.word))
            .collect();
        self.rank(&guesses, n, true)
    }

    /// Score a single guess against the current candidates
    ///
    /// The word does not need to be in the vocabulary.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` for a word of the wrong length.
    pub fn score(&self, word: &Word) -> Result<f64, ClueError> {
        self.score_with(word, false)
    }

    /// Like [`Solver::score`], with the hard-mode coefficients [`Solver::besth`] ranks by
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` for a word of the wrong length.
    pub fn scoreh(&self, word: &Word) -> Result<f64, ClueError> {
        self.score_with(word, true)
    }

    fn score_with(&self, word: &Word, hard: bool) -> Result<f64, ClueError> {
        if let Some(first) = self.vocabulary.entries().first()
            && first.word.len() != word.len()
        {
            return Err(ClueError::LengthMismatch {
                guess: word.clone(),
                key: first.word.clone(),
            });
        }
        Ok(self.scorer.score_unchecked(word, &self.candidates, hard))
    }

    /// Current candidates, in vocabulary order
    #[must_use]
    pub fn list(&self) -> Vec<&'a Word> {
        self.candidates.list()
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn hard_mode(&self) -> &HardModeFilter {
        &self.hard_mode
    }

    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    #[inline]
    #[must_use]
    pub const fn scoring(&self) -> ScoringKind {
        self.scorer.kind()
    }

    /// Switch strategy; candidates and clues are kept
    pub fn set_scoring(&mut self, kind: ScoringKind) {
        self.scorer = kind.scorer();
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    fn rank(&self, guesses: &[&'a Word], n: usize, hard: bool) -> Vec<(&'a Word, f64)> {
        match self.candidates.entries() {
            [] => return Vec::new(),
            [only] => {
                let only: &'a WeightedWord = *only;
                return vec![(&only.word, self.scorer.certain_score())];
            }
            _ => {}
        }

        let start = Instant::now();
        let mut scored: Vec<(&'a Word, f64)> = guesses
            .par_iter()
            .map(|&guess| {
                (
                    guess,
                    self.scorer.score_unchecked(guess, &self.candidates, hard),
                )
            })
            .collect();

        // stable, so ties keep vocabulary order
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        if n > 0 {
            scored.truncate(n);
        }

        debug!(
            "ranked {} guesses against {} candidates ({}) in {:.2?}",
            guesses.len(),
            self.candidates.len(),
            self.scorer.kind(),
            start.elapsed()
        );
        if let Some((word, score)) = scored.first() {
            trace!("best guess {word} scores {score:.4}");
        }
        scored
    }
}
