//! Per-letter guess feedback
//!
//! Scoring compares a guess against the secret and tags every position as
//! `Correct` (right letter, right spot), `Present` (right letter, wrong
//! spot) or `Absent`. Duplicate letters are budgeted: a letter earns at most
//! as many non-`Absent` tags as it has occurrences in the secret, and exact
//! matches claim that budget first.

use super::Word;

/// Feedback tag for a single guessed letter
///
/// Variants are ordered by strength so that the best tag seen for a letter
/// can be kept with `max` (see `game::LetterHints`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter does not appear in the secret (or its occurrences are used up)
    Absent,
    /// Letter appears in the secret at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl Feedback {
    /// Score `guess` against `secret`, producing one tag per position
    ///
    /// # Algorithm
    /// 1. Default every position to `Absent` and pool the secret's letter
    ///    counts.
    /// 2. First pass: tag exact positional matches `Correct`, each consuming
    ///    one occurrence from the pool. The pass covers all five positions
    ///    before any misplaced letter is considered, so exact matches always
    ///    win the budget for a duplicated letter.
    /// 3. Second pass: tag remaining positions `Present` while their letter
    ///    still has pool occurrences left; everything else stays `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::score(&guess, &secret),
    ///     [
    ///         Feedback::Absent,  // T
    ///         Feedback::Correct, // R
    ///         Feedback::Correct, // A
    ///         Feedback::Present, // C
    ///         Feedback::Correct, // E
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> [Self; 5] {
        let mut result = [Self::Absent; 5];
        let mut secret_available = secret.char_counts();

        // First pass: exact matches
        // Allow: index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = Self::Correct;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = secret_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == Self::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = secret_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Self::Present;
                    *count -= 1;
                }
            }
        }

        result
    }
}
