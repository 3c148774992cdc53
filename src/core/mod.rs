//! Core domain types for Wordle
//!
//! Words, marks, signals and clues, and the comparison that links them.
//! Everything here is pure and independent of any word list.

mod clue;
mod word;

pub use clue::{Clue, Mark, Signal, compare};
pub(crate) use clue::signal_between;
pub use word::Word;
