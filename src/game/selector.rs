//! Next word selection
//!
//! Picks a random word whose difficulty is within the target and that has not been
//! shown yet.

use super::difficulty::DifficultyTable;
use crate::core::SwapSet;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Outcome of a selection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A word was picked
    Picked {
        /// The word as written in the list
        word: String,
        /// Lowercase form, recorded in the history
        key: String,
        difficulty: usize,
        /// Whether another candidate is left under the same target
        more_remaining: bool,
    },
    /// No word is left under the target
    Exhausted,
}

/// Pick the next word uniformly among the candidates
///
/// Difficulty is recomputed over the whole list on every call.
pub fn select_next<R: Rng + ?Sized>(
    words: &[String],
    swaps: &SwapSet,
    history: &[String],
    target: usize,
    rng: &mut R,
) -> Selection {
    let table = DifficultyTable::compute(words, swaps);
    let candidates = table.candidates(target, history);

    let Some(&key) = candidates.choose(rng) else {
        return Selection::Exhausted;
    };

    Selection::Picked {
        word: table.original_casing(key).to_string(),
        key: key.to_string(),
        difficulty: table.difficulty_of(key).unwrap_or(0),
        more_remaining: candidates.len() > 1,
    }
}
