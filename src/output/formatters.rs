//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};

/// Format a scored row as share-style emoji
#[must_use]
pub fn tags_to_emoji(tags: &[Feedback; 5]) -> String {
    tags.iter()
        .map(|tag| match tag {
            Feedback::Absent => '⬜',
            Feedback::Present => '🟨',
            Feedback::Correct => '🟩',
        })
        .collect()
}

/// Color one tile: the letter on its feedback color
#[must_use]
pub fn tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(Feedback::Correct) => text.black().on_green(),
        Some(Feedback::Present) => text.black().on_yellow(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Color a whole scored row
#[must_use]
pub fn colored_row(guess: &str, tags: &[Feedback; 5]) -> String {
    guess
        .chars()
        .zip(tags)
        .map(|(letter, &tag)| tile(letter, Some(tag)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_absent() {
        assert_eq!(tags_to_emoji(&[Feedback::Absent; 5]), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        assert_eq!(tags_to_emoji(&[Feedback::Correct; 5]), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let tags = [
            Feedback::Absent,
            Feedback::Correct,
            Feedback::Correct,
            Feedback::Present,
            Feedback::Correct,
        ];
        assert_eq!(tags_to_emoji(&tags), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn colored_row_keeps_every_letter() {
        colored::control::set_override(false);
        let row = colored_row("TRACE", &[Feedback::Correct; 5]);
        for letter in "TRACE".chars() {
            assert!(row.contains(letter), "missing {letter} in {row}");
        }
    }
}
