//! Weighted vocabularies
//!
//! The universe of guessable words, each carrying an answer weight. A weight
//! of zero marks a word that may be guessed but is never the answer.

pub mod loader;

use crate::core::Word;
use crate::error::VocabularyError;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A word and how many answer "occurrence units" it carries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedWord {
    pub word: Word,
    pub weight: u32,
}

impl WeightedWord {
    #[must_use]
    pub const fn new(word: Word, weight: u32) -> Self {
        Self { word, weight }
    }

    /// Whether this word can be drawn as an answer
    #[inline]
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        self.weight > 0
    }
}

/// Ordered, deduplicated word list
///
/// Entries are sorted by word so enumeration (and therefore tie-breaking
/// between equally scored guesses) is reproducible. All words share one
/// length.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<WeightedWord>,
    index: FxHashMap<Word, usize>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary, merging duplicate words by summing their weights
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` for an empty input and
    /// `VocabularyError::MixedLengths` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_prune::core::Word;
    /// use wordle_prune::vocabulary::{Vocabulary, WeightedWord};
    ///
    /// let vocabulary = Vocabulary::new([
    ///     WeightedWord::new(Word::new("slate").unwrap(), 1),
    ///     WeightedWord::new(Word::new("crane").unwrap(), 0),
    ///     WeightedWord::new(Word::new("slate").unwrap(), 2),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(vocabulary.len(), 2);
    /// assert_eq!(vocabulary.get("slate").unwrap().weight, 3);
    /// assert_eq!(vocabulary.entries()[0].word.text(), "crane");
    /// ```
    pub fn new(entries: impl IntoIterator<Item = WeightedWord>) -> Result<Self, VocabularyError> {
        let mut merged: BTreeMap<Word, u32> = BTreeMap::new();
        for entry in entries {
            let weight = merged.entry(entry.word).or_insert(0);
            *weight = weight.saturating_add(entry.weight);
        }

        let word_len = merged.keys().next().ok_or(VocabularyError::Empty)?.len();
        if let Some(found) = merged.keys().find(|w| w.len() != word_len) {
            return Err(VocabularyError::MixedLengths {
                expected: word_len,
                found: found.clone(),
            });
        }

        let entries: Vec<WeightedWord> = merged
            .into_iter()
            .map(|(word, weight)| WeightedWord::new(word, weight))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.word.clone(), i))
            .collect();

        Ok(Self {
            entries,
            index,
            word_len,
        })
    }

    /// Build a vocabulary where every word has weight 1
    ///
    /// # Errors
    /// Fails on invalid words, or for the same reasons as [`Vocabulary::new`].
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pairs(words.into_iter().map(|w| (w, 1)))
    }

    /// Build a vocabulary from `(word, weight)` pairs
    ///
    /// # Errors
    /// Fails on invalid words, or for the same reasons as [`Vocabulary::new`].
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, weight)| Ok(WeightedWord::new(Word::new(word)?, weight)))
            .collect::<Result<Vec<_>, VocabularyError>>()?;
        Self::new(entries)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WeightedWord] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedWord> {
        self.entries.iter()
    }

    /// Answer-eligible entries (weight > 0), in vocabulary order
    pub fn answers(&self) -> impl Iterator<Item = &WeightedWord> {
        self.entries.iter().filter(|e| e.is_answer())
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers().count()
    }

    /// Sum of all answer weights
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letter count shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WeightedWord> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Position of a word in vocabulary order
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a WeightedWord;
    type IntoIter = std::slice::Iter<'a, WeightedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
