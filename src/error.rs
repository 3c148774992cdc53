//! Error types
//!
//! Every fault here is a synchronous, local validation failure. Nothing is
//! retried internally; callers decide what to do with it.

use crate::core::{Clue, Word};
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// A string could not be turned into a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,

    #[error("word \"{0}\" must be alphabetic")]
    NonAlphabetic(String),
}

/// A clue or signal is malformed, or does not fit the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// The two words handed to [`compare`](crate::core::compare) differ in length.
    #[error("length mismatch: \"{guess}\" has {} letters, \"{key}\" has {}", .guess.len(), .key.len())]
    LengthMismatch { guess: Word, key: Word },

    /// The signal does not have one mark per letter.
    #[error("signal has {got} marks, word \"{word}\" has {} letters", .word.len())]
    SignalLength { word: Word, got: usize },

    /// The clue word is not part of the vocabulary.
    #[error("\"{0}\" is not in the word list")]
    UnknownWord(Word),

    /// A character that is not a black, yellow or green mark.
    #[error("invalid mark {0:?}, expected 0/1/2, -/Y/G or ⬛/🟨/🟩")]
    InvalidMark(char),
}

/// A hard-mode guess left out letters that earlier clues revealed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("guess must use the revealed letters: {}", display_letters(.missing))]
pub struct HardModeViolation {
    pub missing: BTreeSet<char>,
}

/// Failures of a solving session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Clue(#[from] ClueError),

    /// No vocabulary entry is consistent with all clues so far.
    #[error("no candidates left after {clue}: the clues contradict each other")]
    Contradiction { clue: Clue },
}

/// Failures of a play session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("\"{0}\" is not in the word list")]
    UnknownWord(Word),

    #[error("\"{0}\" cannot be an answer")]
    NotAnswer(Word),

    #[error("the word list has no answer-eligible words")]
    NoAnswers,

    #[error(transparent)]
    HardMode(#[from] HardModeViolation),

    #[error(transparent)]
    Clue(#[from] ClueError),
}

/// A vocabulary could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("the word list is empty")]
    Empty,

    #[error("all words must have {expected} letters, \"{found}\" has {}", .found.len())]
    MixedLengths { expected: usize, found: Word },

    #[error(transparent)]
    Word(#[from] WordError),
}

/// A word file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized word file format in {} (first line {line:?})", .path.display())]
    Format { path: PathBuf, line: String },

    #[error("invalid weight {value:?} on line {line} of {}", .path.display())]
    Weight {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("no word file given (use --words FILE)")]
    NoWordFile,

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

fn display_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
