//! The Evil Hangman round engine
//!
//! `Round` tracks one game's state and processes guesses; `selection` decides
//! which word family survives each guess.

mod error;
mod round;
pub mod selection;

pub use error::EngineError;
pub use round::Round;
pub use selection::FamilyCounts;
