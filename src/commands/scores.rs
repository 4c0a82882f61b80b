//! Difficulty table command
//!
//! Creates a number of random swaps and reports every word's difficulty.

use crate::game::{ScoredWord, Session};
use rand::Rng;

/// Create up to `swaps` random swaps, then score the active list
///
/// Stops early when the pool runs out of letters.
pub fn scores_after_swaps<R: Rng>(session: &mut Session<'_, R>, swaps: usize) -> Vec<ScoredWord> {
    for _ in 0..swaps {
        if session.create_swap().is_none() {
            break;
        }
    }
    session.scores()
}
