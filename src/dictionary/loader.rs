//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::Dictionary;
use crate::core::Word;
use crate::engine::EngineError;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries that fail validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::dictionary::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice list to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use evil_hangman::dictionary::loader::words_from_slice;
/// use evil_hangman::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from the embedded list
///
/// # Errors
/// Returns `EngineError::EmptyWordSource` only if the embedded list is empty,
/// which would be a packaging defect.
pub fn embedded_dictionary() -> Result<Dictionary, EngineError> {
    Dictionary::build(words_from_slice(super::WORDS))
}
