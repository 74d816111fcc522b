//! The game state machine
//!
//! A [`Session`] owns the board, the cursor, the game status and the letter
//! hints for exactly one game. Letters are typed and erased synchronously;
//! submitting a row awaits the dictionary validator and, on success, scores
//! the row and drives the win/loss transition.
//!
//! Every command takes `&mut self`, so an in-flight [`Session::submit_row`]
//! future holds the exclusive borrow: no other command can run while a
//! submission is outstanding. The future performs all of its awaiting before
//! any mutation, so dropping it mid-validation leaves the session exactly as
//! it was.

use super::board::{Board, COLS, Cursor, ROWS};
use super::keyboard::LetterHints;
use crate::core::{Feedback, Word};
use crate::providers::{DictionaryValidator, SourceError, ValidatorError, WordSource};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the game stands
///
/// Transitions only from `InProgress` into one of the terminal states; once
/// terminal, no command mutates the session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Rows remain and the secret has not been guessed
    InProgress,
    /// A row matched the secret
    Won,
    /// All six rows were used without a match
    Lost,
}

impl GameStatus {
    /// Whether the game has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was refused
///
/// None of these mutate the session: the row stays editable and the status
/// unchanged.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The assembled row is not a dictionary word
    #[error("\"{word}\" is not a valid word")]
    UnknownWord { word: String },

    /// The dictionary could not be consulted; never accepted as valid
    #[error("could not check \"{word}\": {source}")]
    Validator {
        word: String,
        source: ValidatorError,
    },

    /// Fewer than five letters in the current row
    #[error("not enough letters")]
    IncompleteRow,

    /// The game already ended
    #[error("the game is over")]
    GameOver,
}

/// Result of a scored row, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    /// Which row was scored (0-5)
    pub index: usize,
    /// The accepted guess
    pub guess: Word,
    /// One tag per position, aligned with the guess
    pub feedback: [Feedback; COLS],
    /// Status after this row
    pub status: GameStatus,
    /// One-shot end-of-game text; `Some` exactly when this row ended the game
    pub message: Option<String>,
}

/// One game: secret word, board, cursor, status and hints
pub struct Session<V> {
    secret: Word,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
    hints: LetterHints,
    attempts: usize,
    validator: V,
}

impl<V: DictionaryValidator> Session<V> {
    /// Start a game with a secret drawn from `source`
    ///
    /// # Errors
    /// Returns [`SourceError`] if the word source fails; no session exists in
    /// that case and the caller may retry or abort.
    pub async fn start(source: &impl WordSource, validator: V) -> Result<Self, SourceError> {
        let secret = source.fetch_word().await?;
        Ok(Self::with_secret(secret, validator))
    }

    /// Start a game with a known secret
    #[must_use]
    pub fn with_secret(secret: Word, validator: V) -> Self {
        debug!(%secret, "session started");
        Self {
            secret,
            board: Board::new(),
            cursor: Cursor::default(),
            status: GameStatus::InProgress,
            hints: LetterHints::new(),
            attempts: 0,
            validator,
        }
    }

    /// Type one letter into the current row
    ///
    /// Silently ignored when the game is over, the row already has five
    /// letters, or `letter` is not an ASCII letter.
    pub fn push_letter(&mut self, letter: char) {
        if self.status.is_over() || self.cursor.col() >= COLS {
            return;
        }
        if !letter.is_ascii_alphabetic() {
            return;
        }

        self.board.set_letter(
            self.cursor.row(),
            self.cursor.col(),
            letter.to_ascii_uppercase(),
        );
        self.cursor.advance_col();
    }

    /// Erase the most recently typed letter of the current row
    ///
    /// Silently ignored when the game is over or the row is empty.
    pub fn pop_letter(&mut self) {
        if self.status.is_over() || self.cursor.col() == 0 {
            return;
        }

        self.cursor.retreat_col();
        self.board.clear_letter(self.cursor.row(), self.cursor.col());
    }

    /// Submit the current row for validation and scoring
    ///
    /// Asks the dictionary validator first; only a recognized word mutates
    /// the session. On success the row receives its feedback tags, the hints
    /// absorb them, and the game either ends (guess equals secret, or the
    /// sixth row missed) or moves to the next row.
    ///
    /// # Errors
    /// - [`SubmitError::GameOver`] / [`SubmitError::IncompleteRow`] when the
    ///   preconditions fail
    /// - [`SubmitError::UnknownWord`] when the dictionary rejects the row
    /// - [`SubmitError::Validator`] when the dictionary cannot be reached;
    ///   the row is rejected, never accepted unchecked
    pub async fn submit_row(&mut self) -> Result<ScoredRow, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }

        let row = self.cursor.row();
        let text = self.board.row_text(row).ok_or(SubmitError::IncompleteRow)?;
        let guess = Word::new(&text).expect("board rows hold only ASCII letters");

        // The one suspension point; nothing has been mutated yet
        match self.validator.contains(&guess).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(%guess, "guess rejected by dictionary");
                return Err(SubmitError::UnknownWord {
                    word: guess.text().to_string(),
                });
            }
            Err(source) => {
                warn!(%guess, error = %source, "dictionary unavailable, rejecting submission");
                return Err(SubmitError::Validator {
                    word: guess.text().to_string(),
                    source,
                });
            }
        }

        let feedback = Feedback::score(&guess, &self.secret);
        self.board.apply_feedback(row, feedback);
        self.hints.absorb(guess.text(), &feedback);
        self.attempts += 1;

        // Termination compares the whole guess to the secret; the per-letter
        // tags play no part in it
        if guess == self.secret {
            self.status = GameStatus::Won;
        } else if row + 1 == ROWS {
            self.status = GameStatus::Lost;
        } else {
            self.cursor.next_row();
        }

        info!(row, %guess, status = ?self.status, "row scored");

        Ok(ScoredRow {
            index: row,
            guess,
            feedback,
            status: self.status,
            message: self.end_message(),
        })
    }

    /// Current game status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The grid of attempts
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The typing cursor
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Best-known feedback per guessed letter
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &LetterHints {
        &self.hints
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// How many rows have been scored
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// End-of-game text, computed once the status turns terminal
    fn end_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => {
                let praise = match self.attempts {
                    1 => "Genius!",
                    2 => "Magnificent!",
                    3 => "Impressive!",
                    4 => "Splendid!",
                    5 => "Great!",
                    _ => "Phew!",
                };
                Some(format!("{praise} Solved in {}.", self.attempts))
            }
            GameStatus::Lost => Some(format!("Game over! The word was {}.", self.secret)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Accepts every word
    struct OpenDictionary;

    #[async_trait]
    impl DictionaryValidator for OpenDictionary {
        async fn contains(&self, _word: &Word) -> Result<bool, ValidatorError> {
            Ok(true)
        }
    }

    /// Rejects every word
    struct ClosedDictionary;

    #[async_trait]
    impl DictionaryValidator for ClosedDictionary {
        async fn contains(&self, _word: &Word) -> Result<bool, ValidatorError> {
            Ok(false)
        }
    }

    /// Fails every lookup
    struct BrokenDictionary;

    #[async_trait]
    impl DictionaryValidator for BrokenDictionary {
        async fn contains(&self, _word: &Word) -> Result<bool, ValidatorError> {
            Err(ValidatorError::MalformedResponse)
        }
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn session(secret: &str) -> Session<OpenDictionary> {
        Session::with_secret(word(secret), OpenDictionary)
    }

    fn type_word(session: &mut Session<impl DictionaryValidator>, text: &str) {
        for letter in text.chars() {
            session.push_letter(letter);
        }
    }

    #[test]
    fn push_letter_fills_and_advances() {
        let mut s = session("crane");
        s.push_letter('t');
        s.push_letter('R');

        assert_eq!(s.board().cell(0, 0).letter(), Some('T'));
        assert_eq!(s.board().cell(0, 1).letter(), Some('R'));
        assert_eq!(s.cursor().col(), 2);
    }

    #[test]
    fn push_letter_ignores_non_letters() {
        let mut s = session("crane");
        s.push_letter('3');
        s.push_letter(' ');
        s.push_letter('!');

        assert_eq!(s.cursor().col(), 0);
        assert!(s.board().cell(0, 0).is_empty());
    }

    #[test]
    fn push_letter_noop_on_full_row() {
        let mut s = session("crane");
        type_word(&mut s, "TRACE");
        assert_eq!(s.cursor().col(), 5);

        s.push_letter('X');
        assert_eq!(s.cursor().col(), 5);
        assert_eq!(s.board().cell(0, 4).letter(), Some('E'));
    }

    #[test]
    fn pop_letter_noop_at_column_zero() {
        let mut s = session("crane");
        s.pop_letter();
        assert_eq!(s.cursor(), Cursor::default());
    }

    #[test]
    fn pop_letter_clears_last_cell() {
        let mut s = session("crane");
        type_word(&mut s, "TR");
        s.pop_letter();

        assert_eq!(s.cursor().col(), 1);
        assert!(s.board().cell(0, 1).is_empty());
        assert_eq!(s.board().cell(0, 0).letter(), Some('T'));
    }

    #[test]
    fn status_reads_are_idempotent() {
        let s = session("crane");
        assert_eq!(s.status(), s.status());
        assert_eq!(s.cursor(), s.cursor());
        assert_eq!(s.board(), s.board());
    }

    #[tokio::test]
    async fn submit_incomplete_row_is_refused() {
        let mut s = session("crane");
        type_word(&mut s, "TRAC");

        assert!(matches!(
            s.submit_row().await,
            Err(SubmitError::IncompleteRow)
        ));
        assert_eq!(s.cursor().col(), 4);
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn submit_scores_and_advances_row() {
        let mut s = session("crane");
        type_word(&mut s, "TRACE");

        let scored = s.submit_row().await.unwrap();
        assert_eq!(scored.index, 0);
        assert_eq!(scored.guess, word("trace"));
        assert_eq!(
            scored.feedback,
            [
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Present,
                Feedback::Correct,
            ]
        );
        assert_eq!(scored.status, GameStatus::InProgress);
        assert_eq!(scored.message, None);

        // Cursor moved to the next row, feedback landed on the board
        assert_eq!((s.cursor().row(), s.cursor().col()), (1, 0));
        assert_eq!(s.board().cell(0, 1).feedback(), Some(Feedback::Correct));
        assert_eq!(s.attempts(), 1);
    }

    #[tokio::test]
    async fn submit_matching_guess_wins() {
        let mut s = session("crane");
        type_word(&mut s, "CRANE");

        let scored = s.submit_row().await.unwrap();
        assert_eq!(scored.status, GameStatus::Won);
        assert_eq!(scored.feedback, [Feedback::Correct; 5]);
        assert_eq!(scored.message.as_deref(), Some("Genius! Solved in 1."));
        assert!(s.status().is_over());
    }

    #[tokio::test]
    async fn sixth_wrong_guess_loses_and_reveals_secret() {
        let mut s = session("crane");

        for _ in 0..5 {
            type_word(&mut s, "TRACK");
            let scored = s.submit_row().await.unwrap();
            assert_eq!(scored.status, GameStatus::InProgress);
            assert_eq!(scored.message, None);
        }

        type_word(&mut s, "TRACK");
        let scored = s.submit_row().await.unwrap();
        assert_eq!(scored.index, 5);
        assert_eq!(scored.status, GameStatus::Lost);
        assert_eq!(
            scored.message.as_deref(),
            Some("Game over! The word was CRANE.")
        );
    }

    #[tokio::test]
    async fn commands_are_noops_after_game_over() {
        let mut s = session("crane");
        type_word(&mut s, "CRANE");
        s.submit_row().await.unwrap();

        let before = s.board().clone();
        s.push_letter('X');
        s.pop_letter();
        assert_eq!(s.board(), &before);
        assert!(matches!(s.submit_row().await, Err(SubmitError::GameOver)));
    }

    #[tokio::test]
    async fn unknown_word_leaves_state_untouched() {
        let mut s = Session::with_secret(word("crane"), ClosedDictionary);
        type_word(&mut s, "TRACE");
        let board_before = s.board().clone();

        match s.submit_row().await {
            Err(SubmitError::UnknownWord { word }) => assert_eq!(word, "TRACE"),
            other => panic!("expected UnknownWord, got {other:?}"),
        }

        assert_eq!(s.board(), &board_before);
        assert_eq!((s.cursor().row(), s.cursor().col()), (0, 5));
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.attempts(), 0);

        // The row stays editable
        s.pop_letter();
        s.push_letter('K');
        assert_eq!(s.board().row_text(0).as_deref(), Some("TRACK"));
    }

    #[tokio::test]
    async fn validator_failure_rejects_without_mutation() {
        let mut s = Session::with_secret(word("crane"), BrokenDictionary);
        type_word(&mut s, "TRACE");
        let board_before = s.board().clone();

        assert!(matches!(
            s.submit_row().await,
            Err(SubmitError::Validator { .. })
        ));
        assert_eq!(s.board(), &board_before);
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn hints_accumulate_across_rows() {
        let mut s = session("crane");
        type_word(&mut s, "TRACE");
        s.submit_row().await.unwrap();

        assert_eq!(s.hints().get('R'), Some(Feedback::Correct));
        assert_eq!(s.hints().get('T'), Some(Feedback::Absent));
        assert_eq!(s.hints().get('C'), Some(Feedback::Present));

        type_word(&mut s, "CRANE");
        s.submit_row().await.unwrap();
        assert_eq!(s.hints().get('C'), Some(Feedback::Correct));
    }

    #[tokio::test]
    async fn start_draws_secret_from_source() {
        use crate::providers::FixedWordSource;

        let source = FixedWordSource::new(word("slate"));
        let s = Session::start(&source, OpenDictionary).await.unwrap();
        assert_eq!(s.secret(), &word("slate"));
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn win_messages_scale_with_attempts() {
        let mut s = session("crane");
        type_word(&mut s, "TRACE");
        s.submit_row().await.unwrap();
        type_word(&mut s, "CRANE");

        let scored = s.submit_row().await.unwrap();
        assert_eq!(scored.message.as_deref(), Some("Magnificent! Solved in 2."));
    }
}
