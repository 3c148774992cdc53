//! Wordle Prune
//!
//! A Wordle engine: clue comparison, candidate pruning, hard-mode tracking
//! and pluggable partition scoring over weighted word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_prune::core::{Clue, Word};
//! use wordle_prune::solver::{ScoringKind, Solver};
//! use wordle_prune::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_words(["crane", "grate", "irate", "slate", "trace"]).unwrap();
//! let mut solver = Solver::new(&vocabulary, ScoringKind::Entropy);
//!
//! let answer = Word::new("irate").unwrap();
//! let (guess, _) = solver.best(1)[0];
//! solver.add_clue(Clue::from_compare(guess, &answer).unwrap()).unwrap();
//!
//! assert!(solver.list().contains(&&answer));
//! ```

// Core domain types
pub mod core;

// Word lists and loading
pub mod vocabulary;

// Pruning and scoring
pub mod solver;

// Play sessions
pub mod game;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
