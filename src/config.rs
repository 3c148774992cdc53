//! Runtime configuration
//!
//! Built from command-line arguments; the REPL edits its own copy.

use crate::error::LoadError;
use crate::game::Difficulty;
use crate::solver::ScoringKind;
use crate::vocabulary::{Vocabulary, loader};
use std::fmt;
use std::path::PathBuf;

/// Default number of entries shown by `best`, `besth` and `list`
pub const DEFAULT_LIST_SIZE: usize = 20;

/// What the REPL does with guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    /// Enter clues from another game, get suggestions
    #[default]
    Solve,
    /// Guess against a hidden answer
    Play,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solve => "solve",
            Self::Play => "play",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// Keep only words of this length; `None` keeps every word
    pub length: Option<usize>,
    pub word_file: Option<PathBuf>,
    /// Answer-eligible subset; when set, `word_file` lists every guessable word
    pub commons_file: Option<PathBuf>,
    pub strategy: ScoringKind,
    pub list_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            length: Some(5),
            word_file: None,
            commons_file: None,
            strategy: ScoringKind::default(),
            list_size: DEFAULT_LIST_SIZE,
        }
    }
}

impl Config {
    /// Set the length filter; 0 disables it
    pub fn set_length(&mut self, length: usize) {
        self.length = (length > 0).then_some(length);
    }

    /// Load the configured word file(s)
    ///
    /// # Errors
    /// Returns `LoadError::NoWordFile` if no word file is configured, or the
    /// loader's error.
    pub fn load_vocabulary(&self) -> Result<Vocabulary, LoadError> {
        match (&self.word_file, &self.commons_file) {
            (Some(all), Some(commons)) => loader::load_official(all, commons, self.length),
            (Some(file), None) => loader::load_file(file, self.length),
            (None, _) => Err(LoadError::NoWordFile),
        }
    }
}
