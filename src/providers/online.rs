//! Providers backed by public HTTP services
//!
//! Online play talks to two public services: a random-word API for the
//! secret and a dictionary API for guess validation. A dictionary
//! entry-not-found response is a plain "not a word"; only transport problems
//! surface as errors.

use super::{DictionaryValidator, SourceError, ValidatorError, WordSource};
use crate::core::Word;
use async_trait::async_trait;
use serde::Deserialize;

const RANDOM_WORD_URL: &str = "https://random-word-api.vercel.app/api?words=1&length=5";
const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Secret words from a random-word HTTP service
///
/// The service answers with a JSON array of words, e.g. `["crane"]`.
#[derive(Clone)]
pub struct ApiWordSource {
    client: reqwest::Client,
    url: String,
}

impl ApiWordSource {
    /// Source against the default public service
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(RANDOM_WORD_URL)
    }

    /// Source against a custom endpoint (tests, mirrors)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for ApiWordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordSource for ApiWordSource {
    async fn fetch_word(&self) -> Result<Word, SourceError> {
        let words: Vec<String> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = words.first().ok_or(SourceError::EmptyPool)?;
        let word = Word::new(text)?;
        tracing::debug!(%word, "fetched secret word");
        Ok(word)
    }
}

/// One entry of a successful dictionary lookup
///
/// The service answers with an array of entries for a known word and an
/// error object (with a non-2xx status) for an unknown one.
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[allow(dead_code)]
    word: String,
}

/// Guess validation against a dictionary HTTP service
#[derive(Clone)]
pub struct ApiDictionary {
    client: reqwest::Client,
    base_url: String,
}

impl ApiDictionary {
    /// Dictionary against the default public service
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(DICTIONARY_URL)
    }

    /// Dictionary against a custom endpoint (tests, mirrors)
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionaryValidator for ApiDictionary {
    async fn contains(&self, word: &Word) -> Result<bool, ValidatorError> {
        let url = format!("{}/{}", self.base_url, word.text().to_lowercase());
        let response = self.client.get(&url).send().await?;

        // The service reports unknown words with an error status
        if !response.status().is_success() {
            tracing::debug!(%word, status = %response.status(), "dictionary miss");
            return Ok(false);
        }

        let entries: Vec<DictionaryEntry> = response
            .json()
            .await
            .map_err(|_| ValidatorError::MalformedResponse)?;
        Ok(!entries.is_empty())
    }
}
