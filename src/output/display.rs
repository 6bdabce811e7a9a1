//! Display functions for game and simulation output

use super::formatters::{create_progress_bar, guessed_letters, spaced_pattern};
use crate::commands::SimulationResult;
use crate::core::{Pattern, Word};
use crate::engine::{FamilyCounts, Round};
use colored::Colorize;

/// Print the state of the round before a guess is prompted
pub fn print_round_status(round: &Round) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "  {}",
        spaced_pattern(round.pattern()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(50).cyan());
    println!(
        "  Wrong guesses left: {}",
        round.guesses_left().to_string().bright_cyan()
    );
    println!("  Guessed so far:     {}", guessed_letters(&round.guesses_made()));
}

/// Print the word-family map produced by a guess (debug view)
///
/// The chosen pattern, i.e. the family the engine kept, is highlighted.
pub fn print_family_map(counts: &FamilyCounts, chosen: &Pattern) {
    println!("\n  {}", "Word families:".bright_black());
    for (pattern, count) in counts {
        let line = format!("    {pattern}  {count} words");
        if pattern == chosen {
            println!("{}", format!("{line}  ← kept").bright_green());
        } else {
            println!("{}", line.bright_black());
        }
    }
}

/// Print the end-of-round banner and the revealed secret word
pub fn print_round_end(round: &Round, secret: &Word) {
    println!("\n{}", "═".repeat(50).cyan());
    if round.is_won() {
        println!("{}", "  You won! The word was yours fair and square.".green().bold());
    } else {
        println!("{}", "  Out of guesses, you lose!".red().bold());
    }
    println!(
        "  The word was: {}",
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());
}

/// Print the aggregated result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, guess_budget: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = result.guesser_wins as f64 / result.rounds as f64 * 100.0;

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Guesser wins:     {} ({})",
        result.guesser_wins.to_string().green(),
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    println!(
        "   Engine wins:      {}",
        result.engine_wins.to_string().red()
    );
    println!("   Average guesses:  {:.2}", result.average_total_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    for wrong in 0..=guess_budget {
        if let Some(&count) = result.wrong_guess_distribution.get(&wrong) {
            let pct = count as f64 / result.rounds as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {wrong:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
