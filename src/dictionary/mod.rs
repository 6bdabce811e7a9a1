//! Dictionary index: words grouped by length
//!
//! Built once from an external word source, immutable afterwards. Rounds
//! borrow it read-only, so one index can back any number of rounds.

mod embedded;
pub mod loader;

pub use embedded::WORDS;

use crate::core::Word;
use crate::engine::EngineError;
use rustc_hash::FxHashMap;

/// Immutable index of words keyed by length
///
/// Each bucket is sorted and deduplicated at build time, so seeding a round
/// from the same dictionary is fully deterministic.
#[derive(Debug, Clone)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Build an index from a collection of words
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordSource` if the collection yields no words.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::dictionary::Dictionary;
    ///
    /// let words = ["echo", "heal", "best", "lazy", "apple"]
    ///     .iter()
    ///     .map(|s| Word::new(*s).unwrap());
    /// let dictionary = Dictionary::build(words).unwrap();
    ///
    /// assert_eq!(dictionary.word_count(4), 4);
    /// assert_eq!(dictionary.word_count(5), 1);
    /// assert_eq!(dictionary.word_count(9), 0);
    /// ```
    pub fn build(words: impl IntoIterator<Item = Word>) -> Result<Self, EngineError> {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }

        if by_length.is_empty() {
            return Err(EngineError::EmptyWordSource);
        }

        for bucket in by_length.values_mut() {
            bucket.sort();
            bucket.dedup();
        }

        Ok(Self { by_length })
    }

    /// Number of words of the given length, 0 for unknown lengths
    #[must_use]
    pub fn word_count(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// All words of the given length, sorted; empty for unknown lengths
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Sorted list of lengths that have at least one word
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }
}
