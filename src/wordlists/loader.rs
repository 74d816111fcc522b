//! Word list loading utilities
//!
//! Loads custom word lists from disk and converts the embedded constants
//! into typed words.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines that are not valid 5-letter words are skipped (and counted in a
/// warning), duplicates are dropped, order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;

    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(word) = Word::new(trimmed) {
            if seen.insert(word.text().to_string()) {
                words.push(word);
            }
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::warn!(
            skipped,
            path = %path.as_ref().display(),
            "ignored invalid wordlist entries"
        );
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
