//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Tier;
use crate::game::{MAX_THRESHOLD, MIN_THRESHOLD, Session};
use crate::output::{print_scores, print_session};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A parsed line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tier(Tier),
    Swap,
    SwapBetween(char, char),
    Threshold(usize),
    Next,
    Scores,
    Show,
    Help,
    Quit,
}

/// Parse a line of input into a command
///
/// # Errors
///
/// Returns a message describing what was wrong with the input.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    match (head.to_lowercase().as_str(), args.as_slice()) {
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        ("help" | "h" | "?", []) => Ok(Command::Help),
        ("next" | "n", []) => Ok(Command::Next),
        ("scores" | "table", []) => Ok(Command::Scores),
        ("show" | "status", []) => Ok(Command::Show),
        ("swap" | "s", []) => Ok(Command::Swap),
        ("swap" | "s", [a, b]) => match (single_letter(a), single_letter(b)) {
            (Some(a), Some(b)) => Ok(Command::SwapBetween(a, b)),
            _ => Err("Usage: swap <letter> <letter>".to_string()),
        },
        ("tier", [name]) => name
            .parse()
            .map(Command::Tier)
            .map_err(|e: crate::core::TierParseError| e.to_string()),
        ("easy" | "medium" | "hard", []) => head
            .parse()
            .map(Command::Tier)
            .map_err(|e: crate::core::TierParseError| e.to_string()),
        ("threshold" | "t", [value]) => value
            .parse::<usize>()
            .ok()
            .filter(|v| (MIN_THRESHOLD..=MAX_THRESHOLD).contains(v))
            .map(Command::Threshold)
            .ok_or_else(|| format!("Threshold must be {MIN_THRESHOLD}-{MAX_THRESHOLD}")),
        _ => Err(format!("Unknown command '{}'. Type 'help'.", input.trim())),
    }
}

fn single_letter(arg: &str) -> Option<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Apply a command to the session, returning a short status line
///
/// `Quit`, `Help`, `Show` and `Scores` are display commands and leave the session as is.
pub fn apply_command<R: Rng>(session: &mut Session<'_, R>, command: Command) -> String {
    match command {
        Command::Tier(tier) => {
            session.set_tier(tier);
            format!(
                "Switched to {tier} ({} words, {} letters available)",
                session.words().len(),
                session.pool().len()
            )
        }
        Command::Swap => match session.create_swap() {
            Some(swap) => format!("Created swap {swap}"),
            None => "Not enough letters left to swap".to_string(),
        },
        Command::SwapBetween(a, b) => match session.create_swap_between(a, b) {
            Some(swap) => format!("Created swap {swap}"),
            None => format!(
                "Cannot swap {} and {}: both must be different letters still in the pool",
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase()
            ),
        },
        Command::Threshold(value) => {
            let stored = session.set_threshold(value);
            format!("Desired difficulty set to {stored}")
        }
        Command::Next => {
            if !session.is_selection_enabled() {
                return "Choose next word is disabled. Create a swap or change the threshold."
                    .to_string();
            }
            let threshold = session.threshold();
            match session.select_next() {
                Some(word) => format!("Next word: {}", word.to_uppercase()),
                None => format!("No words left with difficulty ≤ {threshold}"),
            }
        }
        Command::Scores | Command::Show | Command::Help | Command::Quit => String::new(),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the prompt.
pub fn run_simple<R: Rng>(mut session: Session<'_, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Letter Swap - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_session(&session);

    loop {
        let Some(input) = get_user_input("\nCommand")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        if input.is_empty() {
            continue;
        }

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}");
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Scores => print_scores(&session.scores()),
            Command::Show => print_session(&session),
            _ => {
                let status = apply_command(&mut session, command);
                println!("{}", status.bright_green());
                print_session(&session);
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  swap [a b]       create a random swap, or swap two chosen letters");
    println!("  next             choose the next word (difficulty ≤ threshold)");
    println!("  threshold <1-15> set the desired difficulty");
    println!("  tier <easy|medium|hard>  switch word list");
    println!("  scores           show every remaining word with its difficulty");
    println!("  show             show the current game");
    println!("  quit             exit");
}

/// Get user input with a prompt, or `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordLists;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("next"), Ok(Command::Next));
        assert_eq!(parse_command("  N "), Ok(Command::Next));
        assert_eq!(parse_command("swap"), Ok(Command::Swap));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("scores"), Ok(Command::Scores));
    }

    #[test]
    fn parse_swap_between() {
        assert_eq!(parse_command("swap C d"), Ok(Command::SwapBetween('c', 'd')));
        assert!(parse_command("swap cd x").is_err());
        assert!(parse_command("swap 1 2").is_err());
    }

    #[test]
    fn parse_tier() {
        assert_eq!(parse_command("tier hard"), Ok(Command::Tier(Tier::Hard)));
        assert_eq!(parse_command("medium"), Ok(Command::Tier(Tier::Medium)));
        assert!(parse_command("tier expert").is_err());
    }

    #[test]
    fn parse_threshold_range() {
        assert_eq!(parse_command("threshold 7"), Ok(Command::Threshold(7)));
        assert_eq!(parse_command("t 15"), Ok(Command::Threshold(15)));
        assert!(parse_command("threshold 0").is_err());
        assert!(parse_command("threshold 16").is_err());
        assert!(parse_command("threshold x").is_err());
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!(parse_command("").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("next now").is_err());
    }

    #[test]
    fn next_is_refused_while_disabled() {
        let lists = WordLists::uniform(&["cat", "dog"]);
        let mut session = Session::new(&lists, StdRng::seed_from_u64(0));

        let status = apply_command(&mut session, Command::Next);
        assert!(status.contains("disabled"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn swap_then_next_shows_word() {
        let lists = WordLists::uniform(&["cat", "dog"]);
        let mut session = Session::new(&lists, StdRng::seed_from_u64(0));

        let status = apply_command(&mut session, Command::SwapBetween('c', 'd'));
        assert_eq!(status, "Created swap C ↔ D");

        let status = apply_command(&mut session, Command::Next);
        assert!(status.starts_with("Next word: "));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn swap_between_reports_bad_letters() {
        let lists = WordLists::uniform(&["cat"]);
        let mut session = Session::new(&lists, StdRng::seed_from_u64(0));

        let status = apply_command(&mut session, Command::SwapBetween('c', 'z'));
        assert!(status.starts_with("Cannot swap C and Z"));
        assert!(session.swaps().is_empty());
    }

    #[test]
    fn tier_switch_reports_sizes() {
        let lists = WordLists::new(
            vec!["cat".to_string()],
            vec!["apple".to_string(), "pear".to_string()],
            vec!["rhythm".to_string()],
        );
        let mut session = Session::new(&lists, StdRng::seed_from_u64(0));

        let status = apply_command(&mut session, Command::Tier(Tier::Medium));
        assert_eq!(status, "Switched to medium (2 words, 5 letters available)");
    }

    #[test]
    fn threshold_reports_stored_value() {
        let lists = WordLists::uniform(&["cat"]);
        let mut session = Session::new(&lists, StdRng::seed_from_u64(0));
        assert_eq!(
            apply_command(&mut session, Command::Threshold(4)),
            "Desired difficulty set to 4"
        );
    }
}
