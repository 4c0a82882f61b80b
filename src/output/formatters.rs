//! Formatting utilities for terminal output

use crate::core::{LetterPool, SwapSet, SwappedLetter};
use colored::{ColoredString, Colorize};

/// Format the active swaps as `C ↔ D, A ↔ O`
#[must_use]
pub fn swap_list(swaps: &SwapSet) -> String {
    if swaps.is_empty() {
        return "No swaps created yet".to_string();
    }
    swaps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the pool as uppercase letters separated by commas
#[must_use]
pub fn pool_letters(pool: &LetterPool) -> String {
    pool.letters()
        .iter()
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercase a swapped word with changed letters in red
#[must_use]
pub fn highlighted_colored(letters: &[SwappedLetter]) -> String {
    letters
        .iter()
        .map(|l| {
            let upper = l.letter.to_uppercase().to_string();
            if l.changed {
                upper.red().bold().to_string()
            } else {
                upper.bright_white().bold().to_string()
            }
        })
        .collect()
}

/// Position of a difficulty on the green-to-red badge scale
///
/// Returns `None` for 0 (drawn neutral). Otherwise 1 maps to 0.0 and `max` maps to 1.0.
#[must_use]
pub fn badge_level(difficulty: usize, max: usize) -> Option<f64> {
    if difficulty == 0 {
        return None;
    }
    let span = max.max(1).saturating_sub(1).max(1) as f64;
    Some(((difficulty - 1) as f64 / span).min(1.0))
}

/// Interpolate a badge level to an RGB color, green at 0.0 and red at 1.0
#[must_use]
pub fn badge_rgb(level: f64) -> (u8, u8, u8) {
    let red = (level * 255.0).round() as u8;
    let green = ((1.0 - level) * 255.0).round() as u8;
    (red, green, 0)
}

/// Color a difficulty number for the score table
#[must_use]
pub fn difficulty_badge(difficulty: usize, max: usize) -> ColoredString {
    let text = format!("{difficulty:>2}");
    match badge_level(difficulty, max) {
        None => text.bright_black(),
        Some(level) => {
            let (r, g, b) = badge_rgb(level);
            text.truecolor(r, g, b).bold()
        }
    }
}
