//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost
//! access: the answer pool the secret is drawn from, and the larger guess
//! list that defines dictionary membership.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

use crate::core::Word;

/// The embedded answer pool as typed words
#[must_use]
pub fn answer_words() -> Vec<Word> {
    loader::words_from_slice(ANSWERS)
}

/// The embedded guess list as typed words
#[must_use]
pub fn guess_words() -> Vec<Word> {
    loader::words_from_slice(GUESSES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase on disk
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn guesses_are_valid_words() {
        for &word in GUESSES {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_guesses() {
        // Every word the secret can be must also be guessable
        let guess_set: std::collections::HashSet<_> = GUESSES.iter().collect();

        for &answer in ANSWERS {
            assert!(
                guess_set.contains(&answer),
                "Answer '{answer}' not in guess list"
            );
        }
    }

    #[test]
    fn typed_lists_convert_completely() {
        assert_eq!(answer_words().len(), ANSWERS_COUNT);
        assert_eq!(guess_words().len(), GUESSES_COUNT);
    }
}
