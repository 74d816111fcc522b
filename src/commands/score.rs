//! Guess scoring command
//!
//! Shows the feedback a guess would earn against a given secret, without
//! playing a game. Handy for settling arguments about duplicate letters.

use crate::core::{Feedback, Word};

/// Result of scoring one guess against one secret
pub struct ScoreReport {
    pub guess: Word,
    pub secret: Word,
    pub feedback: [Feedback; 5],
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either string is not a valid 5-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreReport, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let feedback = Feedback::score(&guess, &secret);
    Ok(ScoreReport {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_pair() {
        let report = score_words("trace", "crane").unwrap();

        assert_eq!(report.guess.text(), "TRACE");
        assert_eq!(report.secret.text(), "CRANE");
        assert_eq!(
            report.feedback,
            [
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Present,
                Feedback::Correct,
            ]
        );
    }

    #[test]
    fn score_rejects_invalid_words() {
        assert!(score_words("toolong", "crane").is_err());
        assert!(score_words("trace", "cr4ne").is_err());
    }
}
