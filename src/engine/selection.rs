//! Word-family selection policy
//!
//! After a guess partitions the candidates into families, exactly one family
//! survives. Hard difficulty always keeps the hardest family (most words).
//! Easy and Medium periodically demote to the second-hardest family, on a
//! fixed schedule keyed to the round number.
//!
//! The policy is fully deterministic: ties on family size are broken by the
//! fewest revealed slots, then by the lexicographically smallest pattern
//! string (hidden marker compared as an ordinary character).

use crate::core::{Difficulty, Pattern};
use std::collections::BTreeMap;

/// Family sizes keyed by derived pattern, ordered by pattern string
///
/// This is also the observable return value of `Round::make_guess`.
pub type FamilyCounts = BTreeMap<Pattern, usize>;

/// Easy uses the second-hardest family on rounds divisible by this
pub const EASY_INTERVAL: u32 = 2;

/// Medium uses the second-hardest family on rounds divisible by this
pub const MEDIUM_INTERVAL: u32 = 4;

/// Pick the surviving pattern for this guess
///
/// `round_number` is the round at the time of the guess, before it is
/// incremented. Returns `None` only for an empty family map.
#[must_use]
pub fn choose(counts: &FamilyCounts, difficulty: Difficulty, round_number: u32) -> Option<Pattern> {
    let demote = match difficulty {
        Difficulty::Easy => round_number % EASY_INTERVAL == 0,
        Difficulty::Medium => round_number % MEDIUM_INTERVAL == 0,
        Difficulty::Hard => false,
    };

    if demote {
        second_hardest(counts)
    } else {
        hardest(counts)
    }
}

/// The hardest family: maximum word count, ties broken as documented above
#[must_use]
pub fn hardest(counts: &FamilyCounts) -> Option<Pattern> {
    let most = counts.values().copied().max()?;

    counts
        .iter()
        .filter(|&(_, &count)| count == most)
        .map(|(pattern, _)| pattern)
        .min_by(|a, b| {
            a.revealed_count()
                .cmp(&b.revealed_count())
                .then_with(|| a.cmp(b))
        })
        .cloned()
}

/// The second-hardest family
///
/// Degenerates to `hardest` when only one family exists. Otherwise removes
/// the hardest pattern and re-runs `hardest` over the remainder.
#[must_use]
pub fn second_hardest(counts: &FamilyCounts) -> Option<Pattern> {
    if counts.len() <= 1 {
        return hardest(counts);
    }

    let top = hardest(counts)?;
    let rest: FamilyCounts = counts
        .iter()
        .filter(|&(pattern, _)| *pattern != top)
        .map(|(pattern, &count)| (pattern.clone(), count))
        .collect();

    hardest(&rest)
}
