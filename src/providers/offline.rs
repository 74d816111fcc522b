//! Providers backed by the embedded word lists
//!
//! Offline play: the secret comes from the embedded answer pool and guesses
//! are validated against the embedded dictionary. Both also accept custom
//! word sets so `--wordlist <path>` works end to end.

use super::{DictionaryValidator, SourceError, ValidatorError, WordSource};
use crate::core::Word;
use crate::wordlists::{self, GUESSES};
use async_trait::async_trait;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Draws the secret at random from a word pool
#[derive(Clone)]
pub struct EmbeddedWordSource {
    pool: Vec<Word>,
}

impl EmbeddedWordSource {
    /// Source over a custom pool
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Self {
        Self { pool }
    }
}

impl Default for EmbeddedWordSource {
    /// Source over the embedded answer list
    fn default() -> Self {
        Self::new(wordlists::answer_words())
    }
}

#[async_trait]
impl WordSource for EmbeddedWordSource {
    async fn fetch_word(&self) -> Result<Word, SourceError> {
        self.pool
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SourceError::EmptyPool)
    }
}

/// Always supplies one predetermined word
///
/// Backs the `--secret` flag and scripted games.
#[derive(Clone)]
pub struct FixedWordSource {
    word: Word,
}

impl FixedWordSource {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self { word }
    }
}

#[async_trait]
impl WordSource for FixedWordSource {
    async fn fetch_word(&self) -> Result<Word, SourceError> {
        Ok(self.word.clone())
    }
}

/// Membership check against an in-memory word set
#[derive(Clone)]
pub struct EmbeddedDictionary {
    words: FxHashSet<String>,
}

impl EmbeddedDictionary {
    /// Dictionary over a custom word set
    pub fn new<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

impl Default for EmbeddedDictionary {
    /// Dictionary over the embedded guess list
    fn default() -> Self {
        Self {
            words: GUESSES.iter().map(|w| w.to_ascii_uppercase()).collect(),
        }
    }
}

#[async_trait]
impl DictionaryValidator for EmbeddedDictionary {
    async fn contains(&self, word: &Word) -> Result<bool, ValidatorError> {
        Ok(self.words.contains(word.text()))
    }
}
