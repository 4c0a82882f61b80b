//! Display functions for command results

use super::formatters::{difficulty_badge, highlighted_colored, pool_letters, swap_list};
use crate::commands::SimulationResult;
use crate::game::{ScoredWord, Session};
use colored::Colorize;
use rand::Rng;

/// Print the difficulty table, hardest first
pub fn print_scores(scores: &[ScoredWord]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "AVAILABLE WORDS & DIFFICULTY".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    if scores.is_empty() {
        println!("{}", "No words available (all words have been selected)".italic());
        return;
    }

    let max = scores.iter().map(|s| s.difficulty).max().unwrap_or(0);
    for scored in scores {
        println!(
            "  {:<30} {}",
            scored.word,
            difficulty_badge(scored.difficulty, max)
        );
    }
}

/// Print the session overview: current word, swaps, pool and history
pub fn print_session<R: Rng>(session: &Session<'_, R>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Tier: {}   Threshold: {}   Swaps: {}",
        session.tier().to_string().bright_yellow().bold(),
        session.threshold().to_string().bright_yellow().bold(),
        session.swaps().len()
    );
    println!("{}", "═".repeat(60).cyan());

    match session.current_word() {
        Some(word) => {
            let difficulty = session.current_difficulty().unwrap_or(0);
            println!(
                "\n  Original:  {}  (difficulty {})",
                word.to_uppercase().bright_white().bold(),
                difficulty.to_string().bright_yellow()
            );
            println!(
                "  Swapped:   {}",
                highlighted_colored(&session.apply_swaps_highlighted(word))
            );
            println!(
                "  Scrambled: {}",
                session.apply_swaps(word).to_uppercase().red().bold()
            );
        }
        None => println!("\n  {}", "No word selected".italic()),
    }

    println!("\n  Swaps:     {}", swap_list(session.swaps()));
    if session.pool().is_empty() {
        println!("  Letters:   {}", "none left".bright_black());
    } else {
        println!("  Letters:   {}", pool_letters(session.pool()));
    }

    if session.history().is_empty() {
        println!("  History:   {}", "No words selected yet".bright_black());
    } else {
        println!("  History:   {}", session.history().join(", "));
    }

    let next = if session.is_selection_enabled() {
        "enabled".green()
    } else {
        "disabled".red()
    };
    let swap = if session.can_create_swap() {
        "enabled".green()
    } else {
        "disabled".red()
    };
    println!("\n  Next word: {next}   Create swap: {swap}");
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sessions:".bright_cyan().bold());
    println!("   Tier:             {}", result.tier);
    println!("   Threshold:        {}", result.threshold);
    println!("   Sessions played:  {}", result.sessions);
    println!(
        "   Words shown:      {} avg ({} – {})",
        format!("{:.1}", result.average_words).bright_yellow().bold(),
        result.min_words.to_string().green(),
        result.max_words.to_string().yellow()
    );
    println!(
        "   Swaps created:    {} avg",
        format!("{:.1}", result.average_swaps).bright_yellow()
    );
    println!(
        "   Fully exhausted:  {}",
        format!("{}/{}", result.exhausted, result.sessions).bright_white()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}
