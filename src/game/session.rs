//! A single game against a hidden answer
//!
//! Answers are drawn with probability proportional to their weight, by a
//! binary search over prefix sums of the answer weights.

use super::Difficulty;
use crate::core::{Clue, Word};
use crate::error::SessionError;
use crate::solver::HardModeFilter;
use crate::vocabulary::{Vocabulary, WeightedWord};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One game: a hidden answer, the guesses so far and the hard-mode letters
///
/// # Examples
/// ```
/// use wordle_prune::core::Word;
/// use wordle_prune::game::{Difficulty, PlaySession};
/// use wordle_prune::vocabulary::Vocabulary;
///
/// let vocabulary = Vocabulary::from_words(["crane", "slate", "trace"]).unwrap();
/// let answer = Word::new("slate").unwrap();
/// let mut game = PlaySession::with_answer(&vocabulary, Difficulty::Easy, &answer).unwrap();
///
/// let clue = game.guess(&Word::new("crane").unwrap()).unwrap();
/// assert_eq!(clue.signal().to_string(), "00202");
/// assert_eq!(game.tries(), 1);
/// ```
#[derive(Debug)]
pub struct PlaySession<'a, R: Rng = StdRng> {
    vocabulary: &'a Vocabulary,
    difficulty: Difficulty,
    hard_mode: HardModeFilter,
    answers: Vec<&'a WeightedWord>,
    cumulative: Vec<u64>,
    answer: &'a Word,
    tries: usize,
    solved: bool,
    rng: R,
}

impl<'a> PlaySession<'a> {
    /// Start a game with a randomly drawn answer
    ///
    /// # Errors
    /// Returns `SessionError::NoAnswers` if no word has a positive weight.
    pub fn new(vocabulary: &'a Vocabulary, difficulty: Difficulty) -> Result<Self, SessionError> {
        Self::with_rng(vocabulary, difficulty, StdRng::from_os_rng())
    }

    /// Start a game with a chosen answer
    ///
    /// # Errors
    /// Returns `SessionError::UnknownWord` or `SessionError::NotAnswer` if
    /// `answer` cannot be the answer.
    pub fn with_answer(
        vocabulary: &'a Vocabulary,
        difficulty: Difficulty,
        answer: &Word,
    ) -> Result<Self, SessionError> {
        let mut session = Self::with_rng(vocabulary, difficulty, StdRng::from_os_rng())?;
        session.new_game(Some(answer))?;
        Ok(session)
    }
}

impl<'a, R: Rng> PlaySession<'a, R> {
    /// Start a game drawing answers from `rng`
    ///
    /// # Errors
    /// Returns `SessionError::NoAnswers` if no word has a positive weight.
    pub fn with_rng(
        vocabulary: &'a Vocabulary,
        difficulty: Difficulty,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let answers: Vec<&'a WeightedWord> = vocabulary.answers().collect();
        let cumulative: Vec<u64> = answers
            .iter()
            .scan(0u64, |sum, entry| {
                *sum += u64::from(entry.weight);
                Some(*sum)
            })
            .collect();

        let answer = draw(&answers, &cumulative, &mut rng).ok_or(SessionError::NoAnswers)?;
        debug!("new game, answer drawn from {} words", answers.len());

        Ok(Self {
            vocabulary,
            difficulty,
            hard_mode: HardModeFilter::new(),
            answers,
            cumulative,
            answer,
            tries: 0,
            solved: false,
            rng,
        })
    }

    /// Reset the game, with `answer` or a freshly drawn one
    ///
    /// # Errors
    /// Returns `SessionError::UnknownWord` if `answer` is not in the
    /// vocabulary and `SessionError::NotAnswer` if its weight is zero. The
    /// current game is kept on error.
    pub fn new_game(&mut self, answer: Option<&Word>) -> Result<(), SessionError> {
        self.answer = match answer {
            Some(word) => {
                let entry = self
                    .vocabulary
                    .get(word.text())
                    .ok_or_else(|| SessionError::UnknownWord(word.clone()))?;
                if !entry.is_answer() {
                    return Err(SessionError::NotAnswer(word.clone()));
                }
                &entry.word
            }
            None => draw(&self.answers, &self.cumulative, &mut self.rng)
                .ok_or(SessionError::NoAnswers)?,
        };
        self.tries = 0;
        self.solved = false;
        self.hard_mode.reset();
        debug!("new {} game", self.difficulty);
        Ok(())
    }

    /// Play a guess and get its clue
    ///
    /// Rejected guesses do not count as tries.
    ///
    /// # Errors
    /// Returns `SessionError::UnknownWord` for a word outside the vocabulary
    /// and, in hard mode, `SessionError::HardMode` listing the revealed
    /// letters the guess leaves out.
    pub fn guess(&mut self, word: &Word) -> Result<Clue, SessionError> {
        if !self.vocabulary.contains(word.text()) {
            return Err(SessionError::UnknownWord(word.clone()));
        }
        if self.difficulty.is_hard() {
            self.hard_mode.check(word)?;
        }

        let clue = Clue::from_compare(word, self.answer)?;
        self.tries += 1;
        self.hard_mode.add_clue(&clue);
        if clue.is_solved() {
            self.solved = true;
            info!("solved in {} tries", self.tries);
        }
        Ok(clue)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &'a Word {
        self.answer
    }

    /// Accepted guesses since the game started
    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// Whether the answer has been guessed
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect for the next guess; letters revealed so far still count
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[inline]
    #[must_use]
    pub const fn hard_mode(&self) -> &HardModeFilter {
        &self.hard_mode
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }
}

fn draw<'a, R: Rng>(
    answers: &[&'a WeightedWord],
    cumulative: &[u64],
    rng: &mut R,
) -> Option<&'a Word> {
    let total = *cumulative.last()?;
    if total == 0 {
        return None;
    }
    let target = rng.random_range(0..total);
    let index = cumulative.partition_point(|&sum| sum <= target);
    answers.get(index).map(|entry| &entry.word)
}
