//! Interactive CLI game loop
//!
//! Drives one round at a time against the engine. All retry behavior lives
//! here: repeated or invalid letters re-prompt instead of ending the round.

use crate::core::Difficulty;
use crate::dictionary::Dictionary;
use crate::engine::{EngineError, Round};
use crate::output::{print_family_map, print_round_end, print_round_status};
use colored::Colorize;
use std::io::{self, Write};

/// Settings for an interactive session
pub struct PlayConfig {
    pub length: usize,
    pub guess_budget: u32,
    pub difficulty: Difficulty,
    /// Show the word-family map after each guess
    pub debug: bool,
}

/// Run interactive rounds until the player quits
///
/// # Errors
///
/// Returns an error on I/O failure or if a round cannot be started with the
/// configured length and budget.
pub fn run_play(dictionary: &Dictionary, config: &PlayConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 E V I L   H A N G M A N          ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Word length {}, {} wrong guesses, {} difficulty.",
        config.length,
        config.guess_budget,
        config.difficulty.name()
    );
    println!("Guess one letter at a time. Commands: 'quit' to exit.\n");

    loop {
        if play_round(dictionary, config)? == RoundEnd::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New round!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// How a round loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    /// Round played to a win or loss; offer another
    Finished,
    /// Player asked to leave; end the whole session
    Quit,
}

/// What one line of player input means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputAction {
    Quit,
    Letter(char),
    Invalid,
}

/// Interpret a trimmed, lowercased input line
fn parse_input(input: &str) -> InputAction {
    match input {
        "quit" | "q" | "exit" => InputAction::Quit,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => InputAction::Letter(letter),
                _ => InputAction::Invalid,
            }
        }
    }
}

/// Play a single round to completion (or until the player quits)
fn play_round(dictionary: &Dictionary, config: &PlayConfig) -> Result<RoundEnd, String> {
    let mut round = match Round::start(
        dictionary,
        config.length,
        config.guess_budget,
        config.difficulty,
    ) {
        Ok(round) => round,
        Err(EngineError::NoWordsOfLength(length)) => {
            return Err(format!(
                "no words of length {length}; available lengths: {:?}",
                dictionary.lengths()
            ));
        }
        Err(e) => return Err(e.to_string()),
    };

    while !round.is_over() {
        print_round_status(&round);
        if config.debug {
            println!(
                "  {}",
                format!("[debug] {} candidate words live", round.live_word_count()).bright_black()
            );
        }

        let input = get_user_input("\nGuess a letter")?.to_lowercase();

        let letter = match parse_input(&input) {
            InputAction::Quit => return Ok(RoundEnd::Quit),
            InputAction::Letter(letter) => letter,
            InputAction::Invalid => {
                println!("{}", "❌ Enter exactly one letter.".red());
                continue;
            }
        };

        match round.make_guess(letter) {
            Ok(families) => {
                if config.debug {
                    print_family_map(&families, round.pattern());
                }
                if !round.pattern().contains(letter.to_ascii_lowercase() as u8) {
                    println!("{}", format!("  No '{letter}' in the word!").red());
                }
            }
            Err(EngineError::AlreadyGuessed(letter)) => {
                println!("{}", format!("❌ You already guessed '{letter}'.").red());
            }
            Err(EngineError::InvalidLetter(letter)) => {
                println!("{}", format!("❌ '{letter}' is not a letter.").red());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    let secret = round.secret_word().map_err(|e| e.to_string())?.clone();
    print_round_end(&round, &secret);
    Ok(RoundEnd::Finished)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
