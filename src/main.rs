//! Evil Hangman - CLI
//!
//! Play interactively, or simulate batches of rounds to see how evil the
//! engine really is at each difficulty.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayConfig, SimulationConfig, run_play, run_simulation},
    core::Difficulty,
    dictionary::{Dictionary, loader},
    output::print_simulation_result,
};

#[derive(Parser)]
#[command(
    name = "evil-hangman",
    about = "Hangman engine that dodges your guesses by keeping the largest word family alive",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default), hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Word length to play
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed before the round is lost
        #[arg(short, long, default_value = "6")]
        guesses: u32,

        /// Show the word-family map after each guess
        #[arg(long)]
        debug: bool,
    },

    /// Simulate automated rounds and report statistics
    Simulate {
        /// Word length to play
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed per round
        #[arg(short, long, default_value = "6")]
        guesses: u32,

        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },
}

/// Build the dictionary from the -w flag: embedded list or a file path
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(loader::embedded_dictionary()?),
        path => {
            let words = loader::load_from_file(path)?;
            Ok(Dictionary::build(words)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let difficulty = Difficulty::from_name(&cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: 5,
        guesses: 6,
        debug: false,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            debug,
        } => {
            let config = PlayConfig {
                length,
                guess_budget: guesses,
                difficulty,
                debug,
            };
            run_play(&dictionary, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Simulate {
            length,
            guesses,
            rounds,
        } => {
            let config = SimulationConfig {
                length,
                guess_budget: guesses,
                difficulty,
                rounds,
            };
            println!(
                "Simulating {rounds} rounds: length {length}, {guesses} wrong guesses, {} difficulty...",
                difficulty.name()
            );
            let result = run_simulation(&dictionary, &config)?;
            print_simulation_result(&result, guesses);
            Ok(())
        }
    }
}
