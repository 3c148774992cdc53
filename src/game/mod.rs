//! Playing against a hidden answer

mod session;

pub use session::PlaySession;

use std::fmt;

/// Whether revealed letters must be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    #[inline]
    #[must_use]
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Hard)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        })
    }
}
