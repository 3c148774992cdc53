//! Hard-mode constraint tracking
//!
//! In hard mode every letter revealed as yellow or green must appear in
//! later guesses. Only presence is checked, not the position of greens.

use crate::core::{Clue, Word};
use crate::error::HardModeViolation;
use std::collections::BTreeSet;

/// Letters that later guesses are required to contain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeFilter {
    required: BTreeSet<char>,
}

impl HardModeFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.required.clear();
    }

    /// Require every letter the clue revealed as present
    pub fn add_clue(&mut self, clue: &Clue) {
        self.required.extend(clue.revealed_letters());
    }

    #[inline]
    #[must_use]
    pub const fn required(&self) -> &BTreeSet<char> {
        &self.required
    }

    /// Required letters missing from `word`; empty means the guess is allowed
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use wordle_prune::core::{Clue, Word};
    /// use wordle_prune::solver::HardModeFilter;
    ///
    /// let mut filter = HardModeFilter::new();
    /// let clue = Clue::new(Word::new("balls").unwrap(), "00120".parse().unwrap()).unwrap();
    /// filter.add_clue(&clue);
    ///
    /// assert!(filter.test(&Word::new("bails").unwrap()).is_empty());
    /// assert_eq!(filter.test(&Word::new("crane").unwrap()), BTreeSet::from(['l']));
    /// ```
    #[must_use]
    pub fn test(&self, word: &Word) -> BTreeSet<char> {
        self.required
            .iter()
            .copied()
            .filter(|&letter| !word.has_letter(letter))
            .collect()
    }

    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.required.iter().all(|&letter| word.has_letter(letter))
    }

    /// Like [`HardModeFilter::test`], as a `Result`
    ///
    /// # Errors
    /// Returns the missing letters as a `HardModeViolation`.
    pub fn check(&self, word: &Word) -> Result<(), HardModeViolation> {
        let missing = self.test(word);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(HardModeViolation { missing })
        }
    }

    /// Keep only the words that are allowed in hard mode
    pub fn filter<'f, 'w, I>(&'f self, words: I) -> impl Iterator<Item = &'w Word> + 'f
    where
        I: IntoIterator<Item = &'w Word>,
        I::IntoIter: 'f,
        'w: 'f,
    {
        words.into_iter().filter(move |word| self.admits(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn clue(text: &str, signal: &str) -> Clue {
        Clue::new(word(text), signal.parse().unwrap()).unwrap()
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filter = HardModeFilter::new();
        assert!(filter.admits(&word("zzzzz")));
        assert!(filter.check(&word("crane")).is_ok());
    }

    #[test]
    fn requires_revealed_letters() {
        let mut filter = HardModeFilter::new();
        filter.add_clue(&clue("balls", "00120"));

        assert_eq!(filter.required(), &BTreeSet::from(['l']));
        assert!(filter.admits(&word("bails")));
        assert!(filter.admits(&word("lxxxx")));
        assert!(!filter.admits(&word("crane")));

        let err = filter.check(&word("crane")).unwrap_err();
        assert_eq!(err.missing, BTreeSet::from(['l']));
    }

    #[test]
    fn required_letters_only_grow() {
        let mut filter = HardModeFilter::new();
        filter.add_clue(&clue("raise", "01002"));
        let first = filter.required().clone();
        assert_eq!(first, BTreeSet::from(['a', 'e']));

        filter.add_clue(&clue("plate", "00202"));
        assert!(filter.required().is_superset(&first));
        assert_eq!(filter.required(), &BTreeSet::from(['a', 'e']));

        filter.add_clue(&clue("heave", "02222"));
        assert_eq!(filter.required(), &BTreeSet::from(['a', 'e', 'v']));
    }

    #[test]
    fn reports_every_missing_letter() {
        let mut filter = HardModeFilter::new();
        filter.add_clue(&clue("crane", "12001"));
        assert_eq!(filter.test(&word("shout")), BTreeSet::from(['c', 'e', 'r']));
        assert_eq!(filter.test(&word("recut")), BTreeSet::new());
    }

    #[test]
    fn filter_keeps_admissible_words() {
        let mut filter = HardModeFilter::new();
        filter.add_clue(&clue("balls", "00120"));

        let words = [word("bails"), word("crane"), word("lulls")];
        let kept: Vec<&str> = filter.filter(&words).map(Word::text).collect();
        assert_eq!(kept, vec!["bails", "lulls"]);
    }

    #[test]
    fn reset_clears() {
        let mut filter = HardModeFilter::new();
        filter.add_clue(&clue("balls", "00120"));
        filter.reset();
        assert!(filter.required().is_empty());
    }
}
