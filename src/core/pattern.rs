//! Revealed-letter pattern computation and representation
//!
//! A pattern is what the guesser sees: one slot per letter of the word, each
//! slot either hidden (`-`) or a revealed lowercase letter. Patterns double as
//! the partition keys of the engine: every candidate word maps to the pattern
//! it would produce for a guess, and words sharing a pattern form one family.
//!
//! Stored as an ASCII string, so `Ord` is plain lexicographic comparison with
//! the hidden marker treated as an ordinary character. That ordering is exactly
//! the final tie-break of the selection policy.

use super::Word;
use std::fmt;

/// Marker for an unrevealed slot.
pub const HIDDEN: u8 = b'-';

/// Revealed-letter pattern for one word length
///
/// Immutable once created; `derive` builds a new pattern rather than mutating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(String);

impl Pattern {
    /// Create an all-hidden pattern of the given length
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(4);
    /// assert_eq!(pattern.as_str(), "----");
    /// assert_eq!(pattern.revealed_count(), 0);
    /// ```
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self("-".repeat(len))
    }

    /// Compute the derived pattern of `word` for a newly guessed `letter`
    ///
    /// For each position: if `word` has `letter` there, reveal `letter`; if
    /// `current` already reveals that position, carry the revealed letter
    /// forward; otherwise the slot stays hidden.
    ///
    /// # Panics
    /// Panics in debug mode if `word` and `current` disagree on length.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let word = Word::new("heal").unwrap();
    /// let start = Pattern::hidden(4);
    /// let derived = Pattern::derive(&word, b'e', &start);
    /// assert_eq!(derived.as_str(), "-e--");
    /// ```
    #[must_use]
    pub fn derive(word: &Word, letter: u8, current: &Self) -> Self {
        debug_assert_eq!(word.len(), current.len(), "word/pattern length mismatch");

        let slots: String = word
            .bytes()
            .iter()
            .zip(current.0.bytes())
            .map(|(&w, p)| {
                if w == letter {
                    char::from(letter)
                } else if p != HIDDEN {
                    char::from(p)
                } else {
                    char::from(HIDDEN)
                }
            })
            .collect();

        Self(slots)
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the degenerate zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pattern as a string slice, hidden slots as `-`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of revealed (non-hidden) slots
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.bytes().filter(|&b| b != HIDDEN).count()
    }

    /// Check whether the pattern reveals `letter` anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter != HIDDEN && self.0.as_bytes().contains(&letter)
    }

    /// True when every slot is revealed (the guesser has won)
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.0.bytes().all(|b| b != HIDDEN)
    }

    /// Consistency check: could `word` still be the secret behind this pattern?
    ///
    /// `word` must agree with every revealed slot, and must not have any
    /// letter from `guessed` in a hidden slot (a guessed letter sitting in a
    /// hidden slot would have been revealed).
    #[must_use]
    pub fn admits(&self, word: &Word, guessed: &[u8]) -> bool {
        if word.len() != self.len() {
            return false;
        }

        word.bytes().iter().zip(self.0.bytes()).all(|(&w, p)| {
            if p == HIDDEN {
                !guessed.contains(&w)
            } else {
                w == p
            }
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a pattern like `"-e--"`: hidden markers and lowercase ASCII letters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.bytes().all(|b| b == HIDDEN || b.is_ascii_lowercase()) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid pattern string: {s}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn hidden_pattern() {
        let pattern = Pattern::hidden(5);
        assert_eq!(pattern.as_str(), "-----");
        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.revealed_count(), 0);
        assert!(!pattern.is_fully_revealed());
    }

    #[test]
    fn derive_reveals_matching_positions() {
        let derived = Pattern::derive(&word("echo"), b'e', &Pattern::hidden(4));
        assert_eq!(derived.as_str(), "e---");

        let derived = Pattern::derive(&word("heal"), b'e', &Pattern::hidden(4));
        assert_eq!(derived.as_str(), "-e--");
    }

    #[test]
    fn derive_reveals_duplicate_letters() {
        let derived = Pattern::derive(&word("esteem"), b'e', &Pattern::hidden(6));
        assert_eq!(derived.as_str(), "e--ee-");

        let derived = Pattern::derive(&word("needle"), b'e', &Pattern::hidden(6));
        assert_eq!(derived.as_str(), "-ee--e");
    }

    #[test]
    fn derive_absent_letter_keeps_pattern() {
        let current: Pattern = "-e--".parse().unwrap();
        let derived = Pattern::derive(&word("heal"), b'z', &current);
        assert_eq!(derived, current);
    }

    #[test]
    fn derive_carries_revealed_slots_forward() {
        let current: Pattern = "-e--".parse().unwrap();
        let derived = Pattern::derive(&word("heal"), b'l', &current);
        assert_eq!(derived.as_str(), "-e-l");
    }

    #[test]
    fn revealed_count_counts_letters_only() {
        let pattern: Pattern = "a--le".parse().unwrap();
        assert_eq!(pattern.revealed_count(), 3);
    }

    #[test]
    fn contains_ignores_hidden_marker() {
        let pattern: Pattern = "-e--".parse().unwrap();
        assert!(pattern.contains(b'e'));
        assert!(!pattern.contains(b'h'));
        assert!(!pattern.contains(HIDDEN));
    }

    #[test]
    fn fully_revealed() {
        let pattern: Pattern = "heal".parse().unwrap();
        assert!(pattern.is_fully_revealed());
        assert_eq!(pattern.revealed_count(), 4);
    }

    #[test]
    fn ordering_is_lexicographic_with_hidden_as_ordinary_char() {
        // '-' sorts before every lowercase letter
        let all_hidden: Pattern = "----".parse().unwrap();
        let e_first: Pattern = "e---".parse().unwrap();
        let e_second: Pattern = "-e--".parse().unwrap();

        assert!(all_hidden < e_second);
        assert!(e_second < e_first);
    }

    #[test]
    fn admits_consistent_word() {
        let pattern: Pattern = "-e--".parse().unwrap();
        assert!(pattern.admits(&word("heal"), &[b'e']));
        assert!(pattern.admits(&word("best"), &[b'e']));
    }

    #[test]
    fn admits_rejects_revealed_mismatch() {
        let pattern: Pattern = "-e--".parse().unwrap();
        // 'e' in the wrong position
        assert!(!pattern.admits(&word("echo"), &[b'e']));
        // no 'e' at all
        assert!(!pattern.admits(&word("lazy"), &[b'e']));
    }

    #[test]
    fn admits_rejects_guessed_letter_in_hidden_slot() {
        let pattern: Pattern = "-e--".parse().unwrap();
        // 't' was guessed; "best" has a 't' in a hidden slot
        assert!(!pattern.admits(&word("best"), &[b'e', b't']));
        assert!(pattern.admits(&word("heal"), &[b'e', b't']));
    }

    #[test]
    fn admits_rejects_length_mismatch() {
        let pattern: Pattern = "-e--".parse().unwrap();
        assert!(!pattern.admits(&word("wheel"), &[b'e']));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        assert!("-e--".parse::<Pattern>().is_ok());
        assert!("-E--".parse::<Pattern>().is_err());
        assert!("-e-!".parse::<Pattern>().is_err());
    }
}
