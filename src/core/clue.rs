//! Clue calculation and representation
//!
//! A signal holds one mark per letter position:
//! - 0 = Black (letter not in the answer, or all its copies already used)
//! - 1 = Yellow (letter in the answer at another position)
//! - 2 = Green (letter in the correct position)

use super::Word;
use crate::error::ClueError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Mark {
    Black = 0,
    Yellow = 1,
    Green = 2,
}

impl Mark {
    /// Numeric code (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Black),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            _ => None,
        }
    }

    /// Parse a single mark character
    ///
    /// Accepts digits, letters (`G`, `Y`, and `-`/`_`/`B`/`X` for black)
    /// and the usual square emoji.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Green),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '0' | '-' | '_' | 'B' | 'b' | 'X' | 'x' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Marks for every position of a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signal(Vec<Mark>);

impl Signal {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Signal where every position is green
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![Mark::Green; len])
    }

    /// Build a signal from numeric codes
    ///
    /// # Errors
    /// Returns `ClueError::InvalidMark` for any code other than 0, 1 or 2.
    pub fn from_codes(codes: &[u8]) -> Result<Self, ClueError> {
        codes
            .iter()
            .map(|&code| {
                Mark::from_code(code).ok_or_else(|| {
                    ClueError::InvalidMark(char::from_digit(u32::from(code), 10).unwrap_or('?'))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(|m| m.code()).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of black positions
    #[must_use]
    pub fn blacks(&self) -> usize {
        self.count(Mark::Black)
    }

    #[must_use]
    pub fn yellows(&self) -> usize {
        self.count(Mark::Yellow)
    }

    #[must_use]
    pub fn greens(&self) -> usize {
        self.count(Mark::Green)
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Green)
    }

    fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert signal to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_prune::core::Signal;
    ///
    /// let signal: Signal = "01202".parse().unwrap();
    /// assert_eq!(signal.to_emoji(), "⬛🟨🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl FromStr for Signal {
    type Err = ClueError;

    /// Parse a signal like `"01202"`, `"0 1 2 0 2"`, `"-Y-GG"` or `"⬛🟨⬛🟩🟩"`
    ///
    /// Whitespace and commas between marks are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .map(|ch| Mark::from_char(ch).ok_or(ClueError::InvalidMark(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.codes().serialize(serializer)
    }
}

/// A guessed word together with the signal it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    word: Word,
    signal: Signal,
}

impl Clue {
    /// Pair a word with a signal
    ///
    /// # Errors
    /// Returns `ClueError::SignalLength` if the signal does not have exactly
    /// one mark per letter.
    pub fn new(word: Word, signal: Signal) -> Result<Self, ClueError> {
        if signal.len() != word.len() {
            return Err(ClueError::SignalLength {
                got: signal.len(),
                word,
            });
        }
        Ok(Self { word, signal })
    }

    /// The clue `guess` would receive if `key` were the answer
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the words differ in length.
    pub fn from_compare(guess: &Word, key: &Word) -> Result<Self, ClueError> {
        let signal = compare(guess, key)?;
        Ok(Self {
            word: guess.clone(),
            signal,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn signal(&self) -> &Signal {
        &self.signal
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.signal.is_solved()
    }

    /// Letters revealed as present (yellow or green)
    pub fn revealed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.word
            .letters()
            .iter()
            .zip(self.signal.marks())
            .filter(|&(_, &mark)| mark != Mark::Black)
            .map(|(&letter, _)| letter)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.signal)
    }
}

/// Calculate the signal when `guess` is played and `key` is the answer
///
/// Greens are marked first. Then, for each letter the words share, the
/// guess positions still holding that letter turn yellow from left to
/// right, at most as many times as the key has unmatched copies of it.
///
/// # Errors
/// Returns `ClueError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_prune::core::{Word, compare};
///
/// let guess = Word::new("abdeb").unwrap();
/// let key = Word::new("abbey").unwrap();
/// let signal = compare(&guess, &key).unwrap();
/// assert_eq!(signal.codes(), vec![2, 2, 0, 2, 1]);
/// ```
pub fn compare(guess: &Word, key: &Word) -> Result<Signal, ClueError> {
    if guess.len() != key.len() {
        return Err(ClueError::LengthMismatch {
            guess: guess.clone(),
            key: key.clone(),
        });
    }
    Ok(signal_between(guess, key))
}

/// Comparison for words already known to share a length
pub(crate) fn signal_between(guess: &Word, key: &Word) -> Signal {
    let guess = guess.letters();
    let key = key.letters();
    debug_assert_eq!(guess.len(), key.len());

    let mut marks = vec![Mark::Black; guess.len()];

    // Greens
    for (i, mark) in marks.iter_mut().enumerate() {
        if guess[i] == key[i] {
            *mark = Mark::Green;
        }
    }

    // Yellows, one letter at a time
    for (first, &letter) in guess.iter().enumerate() {
        if guess[..first].contains(&letter) || !key.contains(&letter) {
            continue;
        }

        let mut unmatched = key
            .iter()
            .zip(guess)
            .filter(|&(&k, &g)| k == letter && g != letter)
            .count();

        for i in first..guess.len() {
            if unmatched == 0 {
                break;
            }
            if guess[i] == letter && key[i] != letter {
                marks[i] = Mark::Yellow;
                unmatched -= 1;
            }
        }
    }

    Signal(marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(guess: &str, key: &str) -> Vec<u8> {
        compare(&Word::new(guess).unwrap(), &Word::new(key).unwrap())
            .unwrap()
            .codes()
    }

    #[test]
    fn compare_reference_cases() {
        assert_eq!(codes("mopey", "favor"), vec![0, 1, 0, 0, 0]);
        assert_eq!(codes("sagol", "tiger"), vec![0, 0, 2, 0, 0]);
        assert_eq!(codes("fleet", "tiger"), vec![0, 0, 0, 2, 1]);
        assert_eq!(codes("abear", "abbey"), vec![2, 2, 1, 0, 0]);
        assert_eq!(codes("abdeb", "abbey"), vec![2, 2, 0, 2, 1]);
    }

    #[test]
    fn compare_length_mismatch() {
        let long = Word::new("wordle").unwrap();
        let short = Word::new("word").unwrap();
        assert!(matches!(
            compare(&long, &short),
            Err(ClueError::LengthMismatch { .. })
        ));
        assert!(compare(&short, &long).is_err());
    }

    #[test]
    fn compare_all_black() {
        assert_eq!(codes("abcde", "fghij"), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn compare_self_is_solved() {
        for word in ["crane", "slate", "aaaaa", "word", "abracadabra"] {
            let w = Word::new(word).unwrap();
            assert!(compare(&w, &w).unwrap().is_solved());
        }
    }

    #[test]
    fn compare_duplicates_capped_by_key() {
        // SPEED vs ERASE: both E's yellow, ERASE has two E's
        assert_eq!(codes("speed", "erase"), vec![1, 0, 1, 1, 0]);
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(codes("robot", "floor"), vec![1, 1, 0, 2, 0]);
        // GEESE vs CREEP: one spare E in the key, leftmost unmatched E takes it
        assert_eq!(codes("geese", "creep"), vec![0, 1, 2, 0, 0]);
    }

    #[test]
    fn compare_leftmost_yellow_wins() {
        // One spare A in the key, the leftmost unmatched guess A gets it
        assert_eq!(codes("aabbb", "cccac"), vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn signal_parse_formats() {
        let digits: Signal = "01202".parse().unwrap();
        let spaced: Signal = "0 1 2 0 2".parse().unwrap();
        let letters: Signal = "-YG-G".parse().unwrap();
        let emoji: Signal = "⬛🟨🟩⬜🟩".parse().unwrap();

        assert_eq!(digits, spaced);
        assert_eq!(digits, letters);
        assert_eq!(digits, emoji);
        assert_eq!(digits.codes(), vec![0, 1, 2, 0, 2]);
    }

    #[test]
    fn signal_parse_invalid() {
        assert_eq!("01302".parse::<Signal>(), Err(ClueError::InvalidMark('3')));
        assert!("GXQ".parse::<Signal>().is_err());
    }

    #[test]
    fn signal_counts() {
        let signal: Signal = "01202".parse().unwrap();
        assert_eq!(signal.blacks(), 2);
        assert_eq!(signal.yellows(), 1);
        assert_eq!(signal.greens(), 2);
        assert!(!signal.is_solved());
        assert!(Signal::solved(5).is_solved());
    }

    #[test]
    fn signal_from_codes() {
        assert_eq!(
            Signal::from_codes(&[0, 1, 2]).unwrap(),
            "012".parse().unwrap()
        );
        assert!(Signal::from_codes(&[3]).is_err());
    }

    #[test]
    fn signal_display_and_serialize() {
        let signal: Signal = "⬛🟨🟩".parse().unwrap();
        assert_eq!(signal.to_string(), "012");
        assert_eq!(serde_json::to_string(&signal).unwrap(), "[0,1,2]");
    }

    #[test]
    fn clue_rejects_wrong_signal_length() {
        let word = Word::new("raise").unwrap();
        let err = Clue::new(word, "0102".parse().unwrap()).unwrap_err();
        assert!(matches!(err, ClueError::SignalLength { got: 4, .. }));
    }

    #[test]
    fn clue_revealed_letters() {
        let clue = Clue::new(Word::new("balls").unwrap(), "00120".parse().unwrap()).unwrap();
        let revealed: Vec<char> = clue.revealed_letters().collect();
        assert_eq!(revealed, vec!['l', 'l']);
    }

    #[test]
    fn clue_from_compare() {
        let guess = Word::new("fleet").unwrap();
        let key = Word::new("tiger").unwrap();
        let clue = Clue::from_compare(&guess, &key).unwrap();
        assert_eq!(clue.word(), &guess);
        assert_eq!(clue.signal().codes(), vec![0, 0, 0, 2, 1]);
        assert_eq!(clue.to_string(), "fleet 00021");
    }
}
