//! Engine error taxonomy
//!
//! Every condition is reported synchronously at the point of violation; the
//! engine never retries internally. Re-prompting after `AlreadyGuessed` or
//! `InvalidLetter` is the caller's job.

use std::fmt;

/// Errors reported by the dictionary index and the round engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The word source supplied to `Dictionary::build` was empty
    EmptyWordSource,
    /// Requested word length was zero
    InvalidWordLength(usize),
    /// Guess budget below the minimum of one
    InvalidGuessBudget(u32),
    /// The dictionary has no words of the requested length
    NoWordsOfLength(usize),
    /// Guessed character outside ASCII alphabetic
    InvalidLetter(char),
    /// The letter was already guessed this round
    AlreadyGuessed(char),
    /// The candidate set is empty; unreachable under correct operation
    NoCandidatesLeft,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordSource => write!(f, "word source may not be empty"),
            Self::InvalidWordLength(len) => {
                write!(f, "word length must be greater than 0, got {len}")
            }
            Self::InvalidGuessBudget(budget) => {
                write!(f, "guess budget must be at least 1, got {budget}")
            }
            Self::NoWordsOfLength(len) => {
                write!(f, "dictionary has no words of length {len}")
            }
            Self::InvalidLetter(ch) => {
                write!(f, "guess must be an ASCII letter, got {ch:?}")
            }
            Self::AlreadyGuessed(ch) => {
                write!(f, "letter {ch:?} has already been guessed this round")
            }
            Self::NoCandidatesLeft => {
                write!(f, "no candidate words remain (engine invariant violated)")
            }
        }
    }
}

impl std::error::Error for EngineError {}
