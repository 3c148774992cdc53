//! Partition scoring
//!
//! A guess splits the candidate set into buckets by the signal each
//! candidate would produce. Every strategy sums a contribution per bucket;
//! lower totals are better guesses. Strategies differ only in that
//! contribution function.

use super::CandidateSet;
use crate::core::{Signal, Word, signal_between};
use crate::error::ClueError;
use crate::vocabulary::WeightedWord;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// One bucket of a partition, as seen by a contribution function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Summed weight of the candidates in this bucket (n)
    pub weight: u64,
    /// Summed weight of all candidates (N)
    pub total: u64,
    /// Black positions in the bucket's signal
    pub blacks: usize,
    /// Whether the ranking is for hard mode
    pub hard: bool,
}

/// Per-bucket score contribution
pub type Contribution = fn(Bucket) -> f64;

/// Slopes of remaining tries against remaining entropy (bits), with the
/// intercept pinned at one try. Index 0 is the pooled slope, index `b` the
/// slope after a clue with `b` blacks.
///
/// These are uncalibrated placeholders, not fitted from game data. Replace
/// them once a regression over real games is available.
const TURNS_PER_BIT_EASY: [f64; 6] = [0.2961, 0.2806, 0.2870, 0.2948, 0.3069, 0.3247];
const TURNS_PER_BIT_HARD: [f64; 6] = [0.3382, 0.3188, 0.3262, 0.3377, 0.3514, 0.3719];

/// Turns-per-bit coefficient for a bucket with `blacks` black positions
///
/// Black counts past the end of the table use its last entry.
#[must_use]
pub fn turns_per_bit(blacks: usize, hard: bool) -> f64 {
    let table = if hard {
        &TURNS_PER_BIT_HARD
    } else {
        &TURNS_PER_BIT_EASY
    };
    table[blacks.min(table.len() - 1)]
}

fn variance(bucket: Bucket) -> f64 {
    let n = bucket.weight as f64;
    n * n
}

fn black_weighted(bucket: Bucket) -> f64 {
    variance(bucket) / (bucket.blacks + 1) as f64
}

fn entropy(bucket: Bucket) -> f64 {
    let n = bucket.weight as f64;
    let p = n / bucket.total as f64;
    p * n.log2() * turns_per_bit(bucket.blacks, bucket.hard)
}

fn black_entropy(bucket: Bucket) -> f64 {
    entropy(bucket) / (bucket.blacks + 1) as f64
}

/// Named scoring strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ScoringKind {
    /// Sum of squared bucket weights
    #[default]
    #[value(alias = "statistical", alias = "default")]
    Variance,
    /// Squared bucket weights, discounted by black count
    Black,
    /// Expected tries from the remaining entropy
    Entropy,
    /// Entropy, discounted by black count
    BlackEntropy,
}

impl ScoringKind {
    pub const ALL: [Self; 4] = [
        Self::Variance,
        Self::Black,
        Self::Entropy,
        Self::BlackEntropy,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variance => "variance",
            Self::Black => "black",
            Self::Entropy => "entropy",
            Self::BlackEntropy => "black-entropy",
        }
    }

    /// Look up a strategy by name
    ///
    /// Accepts the canonical names plus `statistical` and `default` for
    /// the variance strategy.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "variance" | "statistical" | "default" => Some(Self::Variance),
            "black" => Some(Self::Black),
            "entropy" => Some(Self::Entropy),
            "black-entropy" | "blackentropy" => Some(Self::BlackEntropy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn scorer(self) -> Scorer {
        match self {
            Self::Variance => Scorer::new(self, variance, 0.0, 0.0),
            Self::Black => Scorer::new(self, black_weighted, 0.0, 0.0),
            Self::Entropy => Scorer::new(self, entropy, 1.0, 1.0),
            Self::BlackEntropy => Scorer::new(self, black_entropy, 1.0, 1.0),
        }
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
            format!("unknown strategy {s:?}, available: {}", names.join(", "))
        })
    }
}

/// A scoring strategy: contribution function plus constant terms
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    kind: ScoringKind,
    contribution: Contribution,
    offset: f64,
    certain: f64,
}

impl Scorer {
    /// `offset` is added to every bucket sum; `certain` is the score
    /// reported when only one candidate is left.
    #[must_use]
    pub const fn new(
        kind: ScoringKind,
        contribution: Contribution,
        offset: f64,
        certain: f64,
    ) -> Self {
        Self {
            kind,
            contribution,
            offset,
            certain,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ScoringKind {
        self.kind
    }

    /// Score of a guess that is known to be the answer
    #[inline]
    #[must_use]
    pub const fn certain_score(&self) -> f64 {
        self.certain
    }

    /// Score `guess` against the candidates
    ///
    /// If the guess is itself a candidate the total is scaled by
    /// `(N - 1) / N`, since it may end the game outright.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if `guess` is not as long as the
    /// candidate words.
    pub fn score(
        &self,
        guess: &Word,
        candidates: &CandidateSet<'_>,
        hard: bool,
    ) -> Result<f64, ClueError> {
        if let Some(first) = candidates.entries().first()
            && first.word.len() != guess.len()
        {
            return Err(ClueError::LengthMismatch {
                guess: guess.clone(),
                key: first.word.clone(),
            });
        }
        Ok(self.score_unchecked(guess, candidates, hard))
    }

    pub(crate) fn score_unchecked(
        &self,
        guess: &Word,
        candidates: &CandidateSet<'_>,
        hard: bool,
    ) -> f64 {
        let total = candidates.total_weight();
        if total == 0 {
            return self.offset;
        }

        // summed in (weight, blacks) order so equal partitions score equal bits
        let mut shape: Vec<(u64, usize)> = partition(guess, candidates.entries())
            .into_iter()
            .map(|(signal, weight)| (weight, signal.blacks()))
            .collect();
        shape.sort_unstable();

        let raw: f64 = shape
            .into_iter()
            .map(|(weight, blacks)| {
                (self.contribution)(Bucket {
                    weight,
                    total,
                    blacks,
                    hard,
                })
            })
            .sum::<f64>()
            + self.offset;

        if candidates.contains(guess) {
            let n = total as f64;
            raw * (n - 1.0) / n
        } else {
            raw
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        ScoringKind::default().scorer()
    }
}

/// Group candidates by the signal `guess` would produce, summing weights
///
/// # Examples
/// ```
/// use wordle_prune::core::Word;
/// use wordle_prune::solver::partition;
/// use wordle_prune::vocabulary::Vocabulary;
///
/// let vocabulary = Vocabulary::from_words(["crate", "grate", "irate", "slate"]).unwrap();
/// let entries: Vec<_> = vocabulary.iter().collect();
///
/// let buckets = partition(&Word::new("crane").unwrap(), &entries);
/// assert_eq!(buckets.len(), 3);
/// assert_eq!(buckets.values().sum::<u64>(), 4);
/// ```
#[must_use]
pub fn partition(guess: &Word, candidates: &[&WeightedWord]) -> FxHashMap<Signal, u64> {
    let mut buckets = FxHashMap::default();

    for candidate in candidates {
        if candidate.weight == 0 {
            continue;
        }
        let signal = signal_between(guess, &candidate.word);
        *buckets.entry(signal).or_insert(0) += u64::from(candidate.weight);
    }

    buckets
}
