//! Collaborating services the game consumes
//!
//! The session talks to two external services through narrow async traits: a
//! [`WordSource`] that supplies one secret word per game, and a
//! [`DictionaryValidator`] that answers whether a submitted row is a real
//! word. Implementations exist over the embedded word lists (offline play)
//! and over the public HTTP services (online play).

mod offline;
mod online;

pub use offline::{EmbeddedDictionary, EmbeddedWordSource, FixedWordSource};
pub use online::{ApiDictionary, ApiWordSource};

use crate::core::{Word, WordError};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching a secret word
///
/// Fatal to session start: without a secret there is no game, and the caller
/// decides whether to retry or abort.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The word service could not be reached
    #[error("word service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The word service answered with something that is not a playable word
    #[error("word service returned an unusable word: {0}")]
    BadWord(#[from] WordError),

    /// No words to draw from
    #[error("the word pool is empty")]
    EmptyPool,
}

/// Errors from a dictionary lookup
///
/// The session treats these like an unrecognized word (the row stays
/// editable); they are kept distinct so adapters can tell the player the
/// lookup itself failed.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The dictionary service could not be reached
    #[error("dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The dictionary service answered with an unexpected payload
    #[error("dictionary returned an unusable response")]
    MalformedResponse,
}

/// Supplies the secret word for a new game
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch one secret word
    async fn fetch_word(&self) -> Result<Word, SourceError>;
}

/// Answers whether a string is a recognized word
#[async_trait]
pub trait DictionaryValidator: Send + Sync {
    /// Whether `word` is in the dictionary (case-insensitive)
    async fn contains(&self, word: &Word) -> Result<bool, ValidatorError>;
}
