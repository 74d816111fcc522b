//! The game state machine and its owned state
//!
//! One [`Session`] per game: it owns the board, the cursor, the status and
//! the letter hints, and is the only writer of any of them.

mod board;
mod keyboard;
mod session;

pub use board::{Board, COLS, Cell, Cursor, ROWS};
pub use keyboard::LetterHints;
pub use session::{GameStatus, ScoredRow, Session, SubmitError};
