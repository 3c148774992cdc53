//! Candidate set maintenance
//!
//! The answer-eligible words still consistent with every clue applied since
//! the last reset. The set only ever shrinks until it is reset.

use crate::core::{Clue, Word, signal_between};
use crate::error::ClueError;
use crate::vocabulary::{Vocabulary, WeightedWord};

/// Live subset of the vocabulary that could still be the answer
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    vocabulary: &'a Vocabulary,
    entries: Vec<&'a WeightedWord>,
}

impl<'a> CandidateSet<'a> {
    /// Start from every answer-eligible word of `vocabulary`
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            entries: vocabulary.answers().collect(),
        }
    }

    /// Restore every answer-eligible word
    pub fn reset(&mut self) {
        self.entries = self.vocabulary.answers().collect();
    }

    /// Narrow the set to the entries that would have produced `clue`
    ///
    /// The clue is validated before anything changes; on error the set is
    /// left as it was.
    ///
    /// # Errors
    /// Returns `ClueError::UnknownWord` if the clue word is not in the
    /// vocabulary and `ClueError::SignalLength` if the signal does not
    /// match the word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_prune::core::{Clue, Word};
    /// use wordle_prune::solver::CandidateSet;
    /// use wordle_prune::vocabulary::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_words(["crane", "irate", "slate", "trace"]).unwrap();
    /// let mut candidates = CandidateSet::new(&vocabulary);
    ///
    /// let clue = Clue::new(Word::new("slate").unwrap(), "00222".parse().unwrap()).unwrap();
    /// candidates.add_clue(&clue).unwrap();
    ///
    /// let left: Vec<&str> = candidates.list().iter().map(|w| w.text()).collect();
    /// assert_eq!(left, vec!["irate"]);
    /// ```
    pub fn add_clue(&mut self, clue: &Clue) -> Result<(), ClueError> {
        *self = self.narrowed(clue)?;
        Ok(())
    }

    /// The set that would result from applying `clue`, leaving `self` as is
    ///
    /// # Errors
    /// Same as [`CandidateSet::add_clue`].
    pub fn narrowed(&self, clue: &Clue) -> Result<Self, ClueError> {
        let word = clue.word();
        if !self.vocabulary.contains(word.text()) {
            return Err(ClueError::UnknownWord(word.clone()));
        }
        if clue.signal().len() != word.len() {
            return Err(ClueError::SignalLength {
                word: word.clone(),
                got: clue.signal().len(),
            });
        }

        let entries = self
            .entries
            .iter()
            .copied()
            .filter(|entry| signal_between(word, &entry.word) == *clue.signal())
            .collect();

        Ok(Self {
            vocabulary: self.vocabulary,
            entries,
        })
    }

    /// Words of the current set, in vocabulary order
    #[must_use]
    pub fn list(&self) -> Vec<&'a Word> {
        self.entries.iter().map(|e| &e.word).collect()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[&'a WeightedWord] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the weights of all candidates
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Whether `word` is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        // entries keep the vocabulary's sorted order
        self.entries
            .binary_search_by(|entry| entry.word.cmp(word))
            .is_ok()
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Signal;

    fn clue(word: &str, signal: &str) -> Clue {
        Clue::new(Word::new(word).unwrap(), signal.parse().unwrap()).unwrap()
    }

    fn texts<'a>(set: &CandidateSet<'a>) -> Vec<&'a str> {
        set.list().into_iter().map(Word::text).collect()
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_pairs([
            ("crane", 1),
            ("crate", 1),
            ("grate", 2),
            ("irate", 1),
            ("slate", 1),
            ("trace", 1),
            ("bumpy", 0),
        ])
        .unwrap()
    }

    #[test]
    fn starts_with_answer_eligible_words() {
        let vocabulary = vocabulary();
        let set = CandidateSet::new(&vocabulary);
        assert_eq!(set.len(), 6);
        assert_eq!(set.total_weight(), 7);
        assert!(!set.contains(&Word::new("bumpy").unwrap()));
    }

    #[test]
    fn clue_narrows_set() {
        let vocabulary = vocabulary();
        let mut set = CandidateSet::new(&vocabulary);

        // answer: grate
        let answer = Word::new("grate").unwrap();
        let guess = Word::new("crane").unwrap();
        set.add_clue(&Clue::from_compare(&guess, &answer).unwrap())
            .unwrap();

        assert_eq!(texts(&set), vec!["grate", "irate"]);
        assert!(set.contains(&answer));
    }

    #[test]
    fn zero_weight_words_can_be_clues() {
        let vocabulary = vocabulary();
        let mut set = CandidateSet::new(&vocabulary);

        set.add_clue(&clue("bumpy", "00000")).unwrap();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn unknown_word_leaves_set_unchanged() {
        let vocabulary = vocabulary();
        let mut set = CandidateSet::new(&vocabulary);
        set.add_clue(&clue("crane", "22202")).unwrap();
        let before = texts(&set);

        let err = set.add_clue(&clue("zzzzz", "00000")).unwrap_err();
        assert!(matches!(err, ClueError::UnknownWord(_)));
        assert_eq!(texts(&set), before);
    }

    #[test]
    fn contradiction_empties_set() {
        let vocabulary = vocabulary();
        let mut set = CandidateSet::new(&vocabulary);
        set.add_clue(&clue("crane", "22222")).unwrap();
        set.add_clue(&clue("slate", "22222")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn reset_restores() {
        let vocabulary = vocabulary();
        let mut set = CandidateSet::new(&vocabulary);
        set.add_clue(&clue("slate", "00222")).unwrap();
        assert!(set.len() < 6);

        set.reset();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn narrowed_does_not_mutate() {
        let vocabulary = vocabulary();
        let set = CandidateSet::new(&vocabulary);
        let narrowed = set
            .narrowed(&Clue::new(Word::new("trace").unwrap(), Signal::solved(5)).unwrap())
            .unwrap();
        assert_eq!(texts(&narrowed), vec!["trace"]);
        assert_eq!(set.len(), 6);
    }
}
