//! Core domain types for Evil Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod difficulty;
mod pattern;
mod word;

pub use difficulty::Difficulty;
pub use pattern::{HIDDEN, Pattern};
pub use word::{Word, WordError};
