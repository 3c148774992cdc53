//! Word representation
//!
//! A Word is a lower-cased, purely alphabetic string with its letters split
//! out for positional comparison.

use crate::error::WordError;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A validated, case-normalized word
///
/// Equality, hashing and ordering only look at the normalized text, so a
/// `Word` can be looked up in maps by `&str`.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lower-cased. Any alphabetic character is accepted, so
    /// word lists for other languages work too.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains a character
    /// that is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use wordle_prune::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }
        // lower-casing can add combining marks, so check the result
        let text = raw.to_lowercase();
        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::NonAlphabetic(raw.to_string()));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // construction rejects empty words
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters in first-occurrence order
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.letters.len());
        for &letter in &self.letters {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
