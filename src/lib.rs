//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word. It keeps every word
//! consistent with the guesses so far, and on each guess partitions that live
//! set into word families by revealed-letter pattern, keeping whichever family
//! is least helpful to the guesser. It never lies: every revealed letter is
//! truthful for the word it eventually reveals.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::{Difficulty, Word};
//! use evil_hangman::dictionary::Dictionary;
//! use evil_hangman::engine::Round;
//!
//! let words = ["echo", "heal", "best", "lazy"]
//!     .iter()
//!     .map(|s| Word::new(*s).unwrap());
//! let dictionary = Dictionary::build(words).unwrap();
//!
//! let mut round = Round::start(&dictionary, 4, 6, Difficulty::Hard).unwrap();
//! let families = round.make_guess('e').unwrap();
//!
//! assert_eq!(families.len(), 3);
//! assert_eq!(round.pattern().as_str(), "-e--");
//! assert_eq!(round.live_word_count(), 2);
//! ```

// Core domain types
pub mod core;

// Round engine and selection policy
pub mod engine;

// Word dictionary index
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
