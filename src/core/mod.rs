//! Core domain types for the letter swap game
//!
//! Tiers, the letter pool, and swaps. These types hold no randomness and no session
//! state; the `game` module drives them.

mod pool;
mod swap;
mod tier;

pub use pool::LetterPool;
pub use swap::{Swap, SwapSet, SwappedLetter, difficulty_with};
pub use tier::{Tier, TierParseError};
