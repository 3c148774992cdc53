//! Wordle solving
//!
//! Candidate pruning, hard-mode tracking and partition scoring, tied
//! together by [`Solver`].

mod candidates;
mod engine;
mod hard_mode;
mod scoring;

pub use candidates::CandidateSet;
pub use engine::{SessionState, Solver};
pub use hard_mode::HardModeFilter;
pub use scoring::{Bucket, Contribution, Scorer, ScoringKind, partition, turns_per_bit};
