//! Dictionary word representation
//!
//! A Word stores one dictionary entry, normalized to lowercase ASCII.

use std::fmt;

/// A dictionary word of arbitrary positive length
///
/// Always non-empty, ASCII alphabetic, lowercase. Pattern matching across the
/// engine relies on this normalization, so it is enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Echo").unwrap();
    /// assert_eq!(word.text(), "echo");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("dr0id").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; `Word::new` rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as raw ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.text.as_bytes().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("echo").unwrap();
        assert_eq!(word.text(), "echo");
        assert_eq!(word.len(), 4);
        assert_eq!(word.bytes(), b"echo");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ECHO").unwrap();
        assert_eq!(word.text(), "echo");

        let word2 = Word::new("EcHo").unwrap();
        assert_eq!(word2.text(), "echo");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("bewildering").unwrap().len(), 11);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("ech0").is_err()); // Number
        assert!(Word::new("ec ho").is_err()); // Space
        assert!(Word::new("echo!").is_err()); // Punctuation
        assert!(Word::new("caf\u{e9}").is_err()); // Non-ASCII
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("echo").unwrap();
        assert!(word.has_letter(b'e'));
        assert!(word.has_letter(b'o'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("echo").unwrap();
        assert_eq!(format!("{word}"), "echo");
    }

    #[test]
    fn word_ordering_lexicographic() {
        let best = Word::new("best").unwrap();
        let echo = Word::new("echo").unwrap();
        assert!(best < echo);
    }

    #[test]
    fn word_equality_case_insensitive_at_construction() {
        let word1 = Word::new("lazy").unwrap();
        let word2 = Word::new("LAZY").unwrap();
        let word3 = Word::new("heal").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
