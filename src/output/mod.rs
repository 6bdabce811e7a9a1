//! Terminal output formatting
//!
//! Display utilities for the game loop and simulation results.

pub mod display;
pub mod formatters;

pub use display::{print_family_map, print_round_end, print_round_status, print_simulation_result};
