//! Word list loading
//!
//! Three plain-text layouts are understood, detected from the first line:
//! - `word` per line, every word gets weight 1
//! - `word weight` per line
//! - `weight word` per line
//!
//! The "official" layout is a pair of files: every guessable word, and the
//! subset that can be an answer.

use super::{Vocabulary, WeightedWord};
use crate::core::Word;
use crate::error::LoadError;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Plain,
    WordWeight,
    WeightWord,
}

fn detect_layout(line: &str) -> Option<Layout> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let is_word = |s: &str| s.chars().all(char::is_alphanumeric);
    let is_number = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match tokens.as_slice() {
        [word] if is_word(word) => Some(Layout::Plain),
        [word, weight] if is_word(word) && is_number(weight) => Some(Layout::WordWeight),
        [weight, word] if is_number(weight) && is_word(word) => Some(Layout::WeightWord),
        _ => None,
    }
}

/// Parse the contents of a word file
///
/// Lines whose word is not alphabetic are skipped. `path` is only used for
/// error messages.
///
/// # Errors
/// Returns `LoadError::Format` if the first line matches no known layout and
/// `LoadError::Weight` if a weight is not a non-negative integer.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use wordle_prune::vocabulary::loader::parse_word_list;
///
/// let entries = parse_word_list("crane 3\nslate 0\n", Path::new("inline")).unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].weight, 3);
/// ```
pub fn parse_word_list(content: &str, path: &Path) -> Result<Vec<WeightedWord>, LoadError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable();

    let Some(&(_, first)) = lines.peek() else {
        return Ok(Vec::new());
    };
    let layout = detect_layout(first).ok_or_else(|| LoadError::Format {
        path: path.to_path_buf(),
        line: first.to_string(),
    })?;
    debug!("{} uses layout {layout:?}", path.display());

    let mut entries = Vec::new();
    for (number, line) in lines {
        let mut tokens = line.split_whitespace();
        let (word, weight) = match layout {
            Layout::Plain => (tokens.next(), None),
            Layout::WordWeight => {
                let word = tokens.next();
                (word, tokens.next())
            }
            Layout::WeightWord => {
                let weight = tokens.next();
                (tokens.next(), weight)
            }
        };

        let Some(Ok(word)) = word.map(Word::new) else {
            continue;
        };
        let weight = match weight {
            None if layout == Layout::Plain => 1,
            None => continue,
            Some(value) => value.parse::<u32>().map_err(|_| LoadError::Weight {
                path: path.to_path_buf(),
                line: number,
                value: value.to_string(),
            })?,
        };
        entries.push(WeightedWord::new(word, weight));
    }

    Ok(entries)
}

/// Keep only words with exactly `length` letters; `None` keeps everything
#[must_use]
pub fn filter_length(entries: Vec<WeightedWord>, length: Option<usize>) -> Vec<WeightedWord> {
    match length {
        None => entries,
        Some(length) => entries
            .into_iter()
            .filter(|e| e.word.len() == length)
            .collect(),
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a vocabulary from a single word file
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or parsed, or if the
/// remaining words do not form a valid vocabulary.
pub fn load_file<P: AsRef<Path>>(path: P, length: Option<usize>) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let entries = filter_length(parse_word_list(&read(path)?, path)?, length);
    let vocabulary = Vocabulary::new(entries)?;

    info!(
        "loaded {} words ({} answers) from {}",
        vocabulary.len(),
        vocabulary.answer_count(),
        path.display()
    );
    Ok(vocabulary)
}

/// Load a vocabulary from an all-words file and a common-words file
///
/// Common words get weight 1, every other word weight 0. Common words
/// missing from the first file are still included.
///
/// # Errors
/// Returns `LoadError` if either file cannot be read, or if the words do not
/// form a valid vocabulary.
pub fn load_official<P, Q>(
    all_words: P,
    common_words: Q,
    length: Option<usize>,
) -> Result<Vocabulary, LoadError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let all_path = all_words.as_ref();
    let common_path = common_words.as_ref();

    let commons: FxHashSet<Word> = parse_word_list(&read(common_path)?, common_path)?
        .into_iter()
        .map(|e| e.word)
        .collect();
    let rest: FxHashSet<Word> = parse_word_list(&read(all_path)?, all_path)?
        .into_iter()
        .map(|e| e.word)
        .filter(|w| !commons.contains(w))
        .collect();

    let entries = rest
        .into_iter()
        .map(|w| WeightedWord::new(w, 0))
        .chain(commons.into_iter().map(|w| WeightedWord::new(w, 1)))
        .collect();
    let vocabulary = Vocabulary::new(filter_length(entries, length))?;

    info!(
        "loaded {} words ({} answers) from {} and {}",
        vocabulary.len(),
        vocabulary.answer_count(),
        all_path.display(),
        common_path.display()
    );
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<WeightedWord>, LoadError> {
        parse_word_list(content, Path::new("test"))
    }

    fn pairs(entries: &[WeightedWord]) -> Vec<(&str, u32)> {
        entries.iter().map(|e| (e.word.text(), e.weight)).collect()
    }

    #[test]
    fn plain_layout() {
        let entries = parse("crane\nSlate\n\nir4te\nirate\n").unwrap();
        assert_eq!(
            pairs(&entries),
            vec![("crane", 1), ("slate", 1), ("irate", 1)]
        );
    }

    #[test]
    fn word_weight_layout() {
        let entries = parse("crane 12\nslate 0\n").unwrap();
        assert_eq!(pairs(&entries), vec![("crane", 12), ("slate", 0)]);
    }

    #[test]
    fn weight_word_layout() {
        let entries = parse("3 crane\n10 slate\n").unwrap();
        assert_eq!(pairs(&entries), vec![("crane", 3), ("slate", 10)]);
    }

    #[test]
    fn unknown_layout() {
        assert!(matches!(
            parse("crane, slate, irate"),
            Err(LoadError::Format { .. })
        ));
    }

    #[test]
    fn bad_weight() {
        let err = parse("crane 1\nslate -4\n").unwrap_err();
        assert!(matches!(err, LoadError::Weight { line: 2, .. }));
    }

    #[test]
    fn empty_content() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn length_filter() {
        let entries = parse("crane\nword\nslate\nwordle\n").unwrap();
        let five = filter_length(entries.clone(), Some(5));
        assert_eq!(pairs(&five), vec![("crane", 1), ("slate", 1)]);
        assert_eq!(filter_length(entries, None).len(), 4);
    }

    #[test]
    fn missing_file() {
        let err = load_file("/nonexistent/words.txt", Some(5)).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
