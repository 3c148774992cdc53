//! Formatting utilities for terminal output

use crate::core::{Clue, Mark, Word};
use colored::{ColoredString, Colorize};

/// Paint one letter the way the game shows it
#[must_use]
pub fn paint_letter(letter: char, mark: Mark) -> ColoredString {
    let cell = format!(" {} ", letter.to_uppercase());
    match mark {
        Mark::Green => cell.black().on_green().bold(),
        Mark::Yellow => cell.black().on_yellow().bold(),
        Mark::Black => cell.white().on_bright_black(),
    }
}

/// Clue as colored letter tiles followed by its emoji row
#[must_use]
pub fn format_clue(clue: &Clue) -> String {
    let tiles: String = clue
        .word()
        .letters()
        .iter()
        .zip(clue.signal().marks())
        .map(|(&letter, &mark)| paint_letter(letter, mark).to_string())
        .collect();
    format!("{tiles}  {}", clue.signal().to_emoji())
}

/// Ranked guesses, one per line: position, word, score
#[must_use]
pub fn format_ranking(ranked: &[(&Word, f64)]) -> Vec<String> {
    let width = ranked.len().to_string().len();
    ranked
        .iter()
        .enumerate()
        .map(|(i, (word, score))| {
            format!(
                "{:>width$}. {} {}",
                i + 1,
                word.text().to_uppercase().bright_white().bold(),
                format!("{score:.4}").bright_yellow()
            )
        })
        .collect()
}

/// Words packed into lines of at most `per_line` entries
#[must_use]
pub fn format_word_grid(words: &[&Word], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| w.text())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
