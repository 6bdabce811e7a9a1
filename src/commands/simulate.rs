//! Batch self-play simulation
//!
//! Plays many automated rounds of an honest guesser against the engine and
//! aggregates the outcomes. The guesser sees only what a human would: the
//! pattern and the letters guessed so far. It tracks which dictionary words
//! are still consistent with that view and guesses the most common remaining
//! letter, breaking frequency ties at random so rounds do not all replay
//! identically.

use crate::core::Difficulty;
use crate::dictionary::Dictionary;
use crate::engine::{EngineError, Round};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
pub struct SimulationConfig {
    pub length: usize,
    pub guess_budget: u32,
    pub difficulty: Difficulty,
    pub rounds: usize,
}

/// Outcome of one simulated round
struct RoundOutcome {
    guesser_won: bool,
    total_guesses: usize,
    wrong_guesses: u32,
}

/// Aggregated result of a simulation run
pub struct SimulationResult {
    pub rounds: usize,
    pub guesser_wins: usize,
    pub engine_wins: usize,
    pub average_total_guesses: f64,
    pub wrong_guess_distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run the configured number of rounds in parallel
///
/// # Errors
///
/// Returns an error if a round cannot be started with the configured length
/// and budget (bad length, zero budget, or no words of that length).
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
) -> Result<SimulationResult, EngineError> {
    // Fail fast on bad configuration before spinning up workers.
    Round::start(
        dictionary,
        config.length,
        config.guess_budget,
        config.difficulty,
    )?;

    let pb = ProgressBar::new(config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Result<Vec<RoundOutcome>, EngineError> = (0..config.rounds)
        .into_par_iter()
        .map(|_| {
            let outcome = play_round(dictionary, config);
            pb.inc(1);
            outcome
        })
        .collect();
    let outcomes = outcomes?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let guesser_wins = outcomes.iter().filter(|o| o.guesser_won).count();
    let total_guesses: usize = outcomes.iter().map(|o| o.total_guesses).sum();

    let mut wrong_guess_distribution: HashMap<u32, usize> = HashMap::new();
    for outcome in &outcomes {
        *wrong_guess_distribution
            .entry(outcome.wrong_guesses)
            .or_insert(0) += 1;
    }

    Ok(SimulationResult {
        rounds: config.rounds,
        guesser_wins,
        engine_wins: config.rounds - guesser_wins,
        average_total_guesses: total_guesses as f64 / config.rounds.max(1) as f64,
        wrong_guess_distribution,
        duration,
        rounds_per_second: config.rounds as f64 / duration.as_secs_f64(),
    })
}

/// Play one automated round to completion
fn play_round(
    dictionary: &Dictionary,
    config: &SimulationConfig,
) -> Result<RoundOutcome, EngineError> {
    let mut round = Round::start(
        dictionary,
        config.length,
        config.guess_budget,
        config.difficulty,
    )?;
    let mut total_guesses = 0;

    while !round.is_over() {
        let Some(letter) = pick_letter(&round, dictionary) else {
            break; // alphabet exhausted
        };
        round.make_guess(letter)?;
        total_guesses += 1;
    }

    Ok(RoundOutcome {
        guesser_won: round.is_won(),
        total_guesses,
        wrong_guesses: config.guess_budget - round.guesses_left(),
    })
}

/// The guesser's letter choice: most common letter among words consistent
/// with the visible pattern and guessed letters, random among ties
fn pick_letter(round: &Round, dictionary: &Dictionary) -> Option<char> {
    let guessed: Vec<u8> = round.guesses_made().iter().map(|&c| c as u8).collect();

    let mut frequency = [0usize; 26];
    for word in dictionary.words_of_length(round.word_length()) {
        if round.pattern().admits(word, &guessed) {
            let mut seen = [false; 26];
            for &b in word.bytes() {
                seen[usize::from(b - b'a')] = true;
            }
            for (slot, &present) in frequency.iter_mut().zip(seen.iter()) {
                if present {
                    *slot += 1;
                }
            }
        }
    }

    let unguessed: Vec<(usize, usize)> = frequency
        .iter()
        .enumerate()
        .filter(|&(i, _)| !guessed.contains(&(b'a' + i as u8)))
        .map(|(i, &count)| (i, count))
        .collect();

    let best = unguessed.iter().map(|&(_, count)| count).max()?;
    let ties: Vec<usize> = unguessed
        .iter()
        .filter(|&&(_, count)| count == best)
        .map(|&(i, _)| i)
        .collect();

    ties.choose(&mut rand::rng())
        .map(|&i| char::from(b'a' + i as u8))
}
