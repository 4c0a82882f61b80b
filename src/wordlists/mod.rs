//! Word lists for the three tiers
//!
//! Provides embedded word lists compiled into the binary, and the `WordLists` bundle a
//! session reads from.

mod embedded;
pub mod loader;

use crate::core::Tier;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

/// The easy, medium and hard word lists
///
/// Read-only once built; sessions borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordLists {
    #[must_use]
    pub const fn new(easy: Vec<String>, medium: Vec<String>, hard: Vec<String>) -> Self {
        Self { easy, medium, hard }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(EASY),
            loader::words_from_slice(MEDIUM),
            loader::words_from_slice(HARD),
        )
    }

    /// Use the same list for every tier
    #[must_use]
    pub fn uniform(words: &[&str]) -> Self {
        let words = loader::words_from_slice(words);
        Self::new(words.clone(), words.clone(), words)
    }

    #[must_use]
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::embedded()
    }
}
