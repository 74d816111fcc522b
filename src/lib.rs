//! Wordle Game
//!
//! A terminal word-guessing game: six attempts at a secret five-letter word,
//! with duplicate-aware per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameStatus, Session};
//! use wordle_game::providers::EmbeddedDictionary;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let secret = Word::new("crane").unwrap();
//! let mut session = Session::with_secret(secret, EmbeddedDictionary::default());
//!
//! for letter in "crane".chars() {
//!     session.push_letter(letter);
//! }
//! let scored = session.submit_row().await.unwrap();
//! assert_eq!(scored.status, GameStatus::Won);
//! # });
//! ```

// Core domain types
pub mod core;

// The game state machine
pub mod game;

// Word source and dictionary collaborators
pub mod providers;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod logging;
