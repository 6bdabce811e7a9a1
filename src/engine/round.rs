//! One round of Evil Hangman
//!
//! A `Round` owns all per-round state: the pattern the guesser sees, the
//! letters guessed so far, the wrong-guess budget, and the live candidate
//! list. The engine never commits to a secret word; each guess partitions the
//! candidates into word families by derived pattern; the selection policy
//! keeps one family and discards the rest. Every revealed letter is truthful
//! for whichever word the round finally settles on.

use super::selection::{self, FamilyCounts};
use super::EngineError;
use crate::core::{Difficulty, Pattern, Word};
use crate::dictionary::Dictionary;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;

/// State of one active round
///
/// Created by [`Round::start`], mutated only by [`Round::make_guess`].
/// Starting the next round means constructing a fresh `Round`; the old state
/// is simply dropped. A round is single-owner and single-threaded; the
/// [`Dictionary`] it seeds from stays shareable read-only across rounds.
#[derive(Debug, Clone)]
pub struct Round {
    word_length: usize,
    guesses_left: u32,
    guessed_letters: Vec<u8>,
    pattern: Pattern,
    candidate_words: Vec<Word>,
    difficulty: Difficulty,
    round_number: u32,
    last_family_count: usize,
}

impl Round {
    /// Start a round for the given word length, wrong-guess budget, and difficulty
    ///
    /// The candidate list is seeded with a copy of every dictionary word of
    /// the requested length; the pattern starts fully hidden.
    ///
    /// # Errors
    /// - `InvalidWordLength` if `length` is 0
    /// - `InvalidGuessBudget` if `guess_budget` is 0
    /// - `NoWordsOfLength` if the dictionary has no words of `length`
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Difficulty, Word};
    /// use evil_hangman::dictionary::Dictionary;
    /// use evil_hangman::engine::Round;
    ///
    /// let words = ["echo", "heal", "best", "lazy"]
    ///     .iter()
    ///     .map(|s| Word::new(*s).unwrap());
    /// let dictionary = Dictionary::build(words).unwrap();
    ///
    /// let round = Round::start(&dictionary, 4, 6, Difficulty::Hard).unwrap();
    /// assert_eq!(round.pattern().as_str(), "----");
    /// assert_eq!(round.live_word_count(), 4);
    /// ```
    pub fn start(
        dictionary: &Dictionary,
        length: usize,
        guess_budget: u32,
        difficulty: Difficulty,
    ) -> Result<Self, EngineError> {
        if length == 0 {
            return Err(EngineError::InvalidWordLength(length));
        }
        if guess_budget < 1 {
            return Err(EngineError::InvalidGuessBudget(guess_budget));
        }

        let candidates = dictionary.words_of_length(length);
        if candidates.is_empty() {
            return Err(EngineError::NoWordsOfLength(length));
        }

        Ok(Self {
            word_length: length,
            guesses_left: guess_budget,
            guessed_letters: Vec::new(),
            pattern: Pattern::hidden(length),
            candidate_words: candidates.to_vec(),
            difficulty,
            round_number: 1,
            last_family_count: 0,
        })
    }

    /// The fixed word length of this round
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Wrong guesses remaining; never drops below zero
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Number of candidate words still live
    #[inline]
    #[must_use]
    pub fn live_word_count(&self) -> usize {
        self.candidate_words.len()
    }

    /// The pattern the guesser currently sees
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Difficulty fixed at round start
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Distinct derived patterns produced by the most recent guess; 0 before any guess
    #[inline]
    #[must_use]
    pub const fn last_family_count(&self) -> usize {
        self.last_family_count
    }

    /// Check whether a letter has already been guessed this round
    ///
    /// Case-insensitive; non-letters have never been guessed.
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        normalize_letter(letter)
            .is_ok_and(|letter| self.guessed_letters.binary_search(&letter).is_ok())
    }

    /// Letters guessed so far, sorted ascending
    #[must_use]
    pub fn guesses_made(&self) -> Vec<char> {
        self.guessed_letters.iter().map(|&b| char::from(b)).collect()
    }

    /// True once every slot of the pattern is revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pattern.is_fully_revealed()
    }

    /// True once the budget is exhausted or the pattern is fully revealed
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.guesses_left == 0 || self.is_won()
    }

    /// Process one guess
    ///
    /// Partitions the live candidates into word families keyed by derived
    /// pattern, lets the selection policy pick the surviving family, replaces
    /// the candidate list with that family, and charges a wrong guess if the
    /// chosen pattern does not contain the letter. Returns the full
    /// family-size map, ordered by pattern, for observability and testing.
    ///
    /// No state changes on a failed call.
    ///
    /// # Errors
    /// - `InvalidLetter` if `letter` is not ASCII alphabetic
    /// - `AlreadyGuessed` if the letter was guessed earlier this round
    pub fn make_guess(&mut self, letter: char) -> Result<FamilyCounts, EngineError> {
        let letter = normalize_letter(letter)?;
        if self.guessed_letters.binary_search(&letter).is_ok() {
            return Err(EngineError::AlreadyGuessed(char::from(letter)));
        }

        let mut families: BTreeMap<Pattern, Vec<Word>> = BTreeMap::new();
        for word in &self.candidate_words {
            let derived = Pattern::derive(word, letter, &self.pattern);
            families.entry(derived).or_default().push(word.clone());
        }

        let counts: FamilyCounts = families
            .iter()
            .map(|(pattern, words)| (pattern.clone(), words.len()))
            .collect();

        let chosen = selection::choose(&counts, self.difficulty, self.round_number)
            .ok_or(EngineError::NoCandidatesLeft)?;
        let survivors = families
            .remove(&chosen)
            .ok_or(EngineError::NoCandidatesLeft)?;

        // All preconditions passed; commit.
        let insert_at = self.guessed_letters.partition_point(|&b| b < letter);
        self.guessed_letters.insert(insert_at, letter);
        self.last_family_count = counts.len();
        self.candidate_words = survivors;
        self.pattern = chosen;
        self.round_number += 1;

        if !self.pattern.contains(letter) {
            self.guesses_left = self.guesses_left.saturating_sub(1);
        }

        Ok(counts)
    }

    /// The word this round "was" tracking
    ///
    /// Selects one live candidate uniformly at random without mutating the
    /// round. Intended for the end of a round; calling it mid-round simply
    /// reveals a current random survivor and does not end the round.
    ///
    /// # Errors
    /// Returns `NoCandidatesLeft` if the candidate list is empty, which is
    /// unreachable under correct operation.
    pub fn secret_word(&self) -> Result<&Word, EngineError> {
        self.candidate_words
            .choose(&mut rand::rng())
            .ok_or(EngineError::NoCandidatesLeft)
    }
}

/// Normalize a guessed character to a lowercase ASCII letter byte
fn normalize_letter(letter: char) -> Result<u8, EngineError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_lowercase() as u8)
    } else {
        Err(EngineError::InvalidLetter(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::build(words.iter().map(|s| Word::new(*s).unwrap())).unwrap()
    }

    fn candidate_texts(round: &Round) -> Vec<&str> {
        round.candidate_words.iter().map(Word::text).collect()
    }

    #[test]
    fn start_initializes_round_state() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let round = Round::start(&dict, 4, 6, Difficulty::Medium).unwrap();

        assert_eq!(round.word_length(), 4);
        assert_eq!(round.guesses_left(), 6);
        assert_eq!(round.pattern().as_str(), "----");
        assert_eq!(round.live_word_count(), 4);
        assert_eq!(round.last_family_count(), 0);
        assert!(round.guesses_made().is_empty());
        assert!(!round.is_over());
    }

    #[test]
    fn start_rejects_zero_length() {
        let dict = dictionary(&["echo"]);
        assert!(matches!(
            Round::start(&dict, 0, 6, Difficulty::Hard),
            Err(EngineError::InvalidWordLength(0))
        ));
    }

    #[test]
    fn start_rejects_zero_budget() {
        let dict = dictionary(&["echo"]);
        assert!(matches!(
            Round::start(&dict, 4, 0, Difficulty::Hard),
            Err(EngineError::InvalidGuessBudget(0))
        ));
    }

    #[test]
    fn start_rejects_unknown_length() {
        let dict = dictionary(&["echo"]);
        assert!(matches!(
            Round::start(&dict, 9, 6, Difficulty::Hard),
            Err(EngineError::NoWordsOfLength(9))
        ));
    }

    #[test]
    fn hard_guess_keeps_hardest_family() {
        // Guess 'e' splits four words into three families; the two-word
        // family survives and no wrong guess is charged.
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        let counts = round.make_guess('e').unwrap();

        let expected: Vec<(&str, usize)> = vec![("----", 1), ("-e--", 2), ("e---", 1)];
        let actual: Vec<(&str, usize)> = counts
            .iter()
            .map(|(pattern, &count)| (pattern.as_str(), count))
            .collect();
        assert_eq!(actual, expected);

        assert_eq!(round.pattern().as_str(), "-e--");
        assert_eq!(candidate_texts(&round), vec!["best", "heal"]);
        assert_eq!(round.guesses_left(), 6);
        assert_eq!(round.last_family_count(), 3);
    }

    #[test]
    fn absent_letter_charges_wrong_guess_and_keeps_pattern() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 3, Difficulty::Hard).unwrap();

        let counts = round.make_guess('x').unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&"----".parse::<Pattern>().unwrap()), Some(&4));
        assert_eq!(round.guesses_left(), 2);
        assert_eq!(round.pattern().as_str(), "----");
        assert_eq!(round.live_word_count(), 4);
    }

    #[test]
    fn easy_demotes_to_second_hardest_on_even_round() {
        let dict = dictionary(&["aa", "ab", "bb"]);
        let mut round = Round::start(&dict, 2, 6, Difficulty::Easy).unwrap();

        // Round 1 (odd): absent letter, single family, trivial selection.
        round.make_guess('z').unwrap();
        assert_eq!(round.live_word_count(), 3);

        // Round 2 (even): 'a' splits into "aa":1, "a-":1, "--":1. Hardest is
        // "--" (tie on count, fewest revealed); second hardest is "a-".
        let counts = round.make_guess('a').unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(round.pattern().as_str(), "a-");
        assert_eq!(candidate_texts(&round), vec!["ab"]);

        let hardest = selection::hardest(&counts).unwrap();
        assert!(counts[round.pattern()] <= counts[&hardest]);
    }

    #[test]
    fn easy_uses_hardest_on_odd_rounds() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Easy).unwrap();

        round.make_guess('e').unwrap();
        assert_eq!(round.pattern().as_str(), "-e--");
    }

    #[test]
    fn tie_break_prefers_lexicographically_smallest_pattern() {
        // "ab" and "ba" split on 'a' into "a-" and "-a": equal counts, equal
        // revealed slots. '-' compares below 'a', so "-a" must win.
        let dict = dictionary(&["ab", "ba"]);
        let mut round = Round::start(&dict, 2, 6, Difficulty::Hard).unwrap();

        round.make_guess('a').unwrap();
        assert_eq!(round.pattern().as_str(), "-a");
        assert_eq!(candidate_texts(&round), vec!["ba"]);
    }

    #[test]
    fn repeated_letter_rejected_without_state_change() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        round.make_guess('e').unwrap();
        assert!(round.already_guessed('e'));
        assert!(round.already_guessed('E'));

        let pattern_before = round.pattern().clone();
        let left_before = round.guesses_left();
        let live_before = round.live_word_count();
        let made_before = round.guesses_made();

        assert!(matches!(
            round.make_guess('e'),
            Err(EngineError::AlreadyGuessed('e'))
        ));

        assert_eq!(round.pattern(), &pattern_before);
        assert_eq!(round.guesses_left(), left_before);
        assert_eq!(round.live_word_count(), live_before);
        assert_eq!(round.guesses_made(), made_before);
    }

    #[test]
    fn non_letter_guess_rejected() {
        let dict = dictionary(&["echo"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        assert!(matches!(
            round.make_guess('3'),
            Err(EngineError::InvalidLetter('3'))
        ));
        assert!(matches!(
            round.make_guess('!'),
            Err(EngineError::InvalidLetter('!'))
        ));
        assert_eq!(round.guesses_left(), 6);
    }

    #[test]
    fn guesses_made_sorted_and_lowercased() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        round.make_guess('T').unwrap();
        round.make_guess('e').unwrap();
        round.make_guess('A').unwrap();

        assert_eq!(round.guesses_made(), vec!['a', 'e', 't']);
    }

    #[test]
    fn accessors_idempotent_between_guesses() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();
        round.make_guess('e').unwrap();

        assert_eq!(round.pattern(), round.pattern());
        assert_eq!(round.live_word_count(), round.live_word_count());
        assert_eq!(round.guesses_left(), round.guesses_left());
    }

    #[test]
    fn candidates_never_empty_and_always_consistent() {
        // Full-alphabet sweep: after every guess at least one word survives,
        // and every survivor re-derives to the current pattern.
        let dict = dictionary(&[
            "amber", "apple", "blink", "brave", "chord", "crane", "drift", "eagle", "slate",
        ]);
        let mut round = Round::start(&dict, 5, 26, Difficulty::Medium).unwrap();

        for letter in 'a'..='z' {
            round.make_guess(letter).unwrap();
            assert!(round.live_word_count() > 0, "after '{letter}'");

            let guessed: Vec<u8> = round.guesses_made().iter().map(|&c| c as u8).collect();
            for word in &round.candidate_words {
                assert!(
                    round.pattern().admits(word, &guessed),
                    "'{word}' inconsistent with {} after '{letter}'",
                    round.pattern()
                );
            }
        }
    }

    #[test]
    fn guesses_left_saturates_at_zero() {
        let dict = dictionary(&["echo"]);
        let mut round = Round::start(&dict, 4, 1, Difficulty::Hard).unwrap();

        round.make_guess('z').unwrap();
        assert_eq!(round.guesses_left(), 0);
        assert!(round.is_over());

        round.make_guess('q').unwrap();
        assert_eq!(round.guesses_left(), 0);
    }

    #[test]
    fn round_won_when_pattern_fully_revealed() {
        let dict = dictionary(&["echo"]);
        let mut round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        for letter in ['e', 'c', 'h', 'o'] {
            round.make_guess(letter).unwrap();
        }

        assert!(round.is_won());
        assert!(round.is_over());
        assert_eq!(round.pattern().as_str(), "echo");
        assert_eq!(round.secret_word().unwrap().text(), "echo");
    }

    #[test]
    fn secret_word_is_a_live_candidate_and_does_not_mutate() {
        let dict = dictionary(&["echo", "heal", "best", "lazy"]);
        let round = Round::start(&dict, 4, 6, Difficulty::Hard).unwrap();

        let live_before = round.live_word_count();
        for _ in 0..20 {
            let secret = round.secret_word().unwrap();
            assert!(round.candidate_words.contains(secret));
        }
        assert_eq!(round.live_word_count(), live_before);
    }
}
