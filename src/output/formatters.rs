//! Formatting utilities for terminal output

use crate::core::{HIDDEN, Pattern};

/// Format a pattern with spaces between slots, e.g. `- e - -`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);

    for (i, slot) in pattern.as_str().bytes().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(if slot == HIDDEN { '_' } else { char::from(slot) });
    }

    result
}

/// Format guessed letters as `[a, c, e]`
#[must_use]
pub fn guessed_letters(letters: &[char]) -> String {
    let mut result = String::from("[");

    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        result.push(*letter);
    }

    result.push(']');
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_hidden_slots_as_underscores() {
        let pattern: Pattern = "-e--".parse().unwrap();
        assert_eq!(spaced_pattern(&pattern), "_ e _ _");
    }

    #[test]
    fn spaced_pattern_fully_revealed() {
        let pattern: Pattern = "heal".parse().unwrap();
        assert_eq!(spaced_pattern(&pattern), "h e a l");
    }

    #[test]
    fn guessed_letters_formats_like_a_list() {
        assert_eq!(guessed_letters(&['a', 'c', 'e']), "[a, c, e]");
        assert_eq!(guessed_letters(&['x']), "[x]");
        assert_eq!(guessed_letters(&[]), "[]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
