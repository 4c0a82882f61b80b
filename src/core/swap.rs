//! Letter swaps
//!
//! A `Swap` is a symmetric substitution between two letters. A `SwapSet` keeps the
//! swaps in creation order and renders words through them.

use rustc_hash::FxHashSet;
use std::fmt;

/// An unordered pair of two distinct letters
///
/// Wherever either letter appears in a word, the other one is rendered instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    first: char,
    second: char,
}

impl Swap {
    /// Create a swap between two distinct letters
    ///
    /// Returns `None` if both letters are the same.
    ///
    /// # Examples
    /// ```
    /// use letter_swap::core::Swap;
    ///
    /// let swap = Swap::new('c', 'd').unwrap();
    /// assert_eq!(swap.apply('c'), 'd');
    /// assert_eq!(swap.apply('x'), 'x');
    ///
    /// assert!(Swap::new('a', 'a').is_none());
    /// ```
    #[must_use]
    pub fn new(first: char, second: char) -> Option<Self> {
        (first != second).then_some(Self { first, second })
    }

    /// The two letters in the order they were picked
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> (char, char) {
        (self.first, self.second)
    }

    /// Check if a letter participates in this swap
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter == self.first || letter == self.second
    }

    /// Map a single letter through the swap
    #[inline]
    #[must_use]
    pub fn apply(&self, letter: char) -> char {
        if letter == self.first {
            self.second
        } else if letter == self.second {
            self.first
        } else {
            letter
        }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ↔ {}",
            self.first.to_ascii_uppercase(),
            self.second.to_ascii_uppercase()
        )
    }
}

/// A letter of a swapped word, flagged if any swap changed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwappedLetter {
    pub letter: char,
    pub changed: bool,
}

/// Ordered collection of swaps
///
/// Swaps only accumulate. Each letter belongs to at most one swap because letters are
/// taken out of the pool when a swap is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapSet {
    swaps: Vec<Swap>,
}

impl SwapSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { swaps: Vec::new() }
    }

    pub fn push(&mut self, swap: Swap) {
        self.swaps.push(swap);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swap> {
        self.swaps.iter()
    }

    /// Every letter that is a member of some swap
    #[must_use]
    pub fn letters(&self) -> FxHashSet<char> {
        self.swaps
            .iter()
            .flat_map(|swap| {
                let (a, b) = swap.letters();
                [a, b]
            })
            .collect()
    }

    /// Render a word through every swap in order
    ///
    /// The word is lowercased first.
    ///
    /// # Examples
    /// ```
    /// use letter_swap::core::{Swap, SwapSet};
    ///
    /// let mut swaps = SwapSet::new();
    /// swaps.push(Swap::new('c', 'd').unwrap());
    /// assert_eq!(swaps.apply("Cat"), "dat");
    /// assert_eq!(swaps.apply("dog"), "cog");
    /// ```
    #[must_use]
    pub fn apply(&self, word: &str) -> String {
        let mut swapped = word.to_lowercase();
        for swap in &self.swaps {
            swapped = swapped.chars().map(|letter| swap.apply(letter)).collect();
        }
        swapped
    }

    /// Render a word through every swap, tracking which positions changed
    ///
    /// A position stays flagged once any swap touched it, even if a later swap
    /// turned it back into the original letter.
    #[must_use]
    pub fn apply_highlighted(&self, word: &str) -> Vec<SwappedLetter> {
        let mut letters: Vec<SwappedLetter> = word
            .to_lowercase()
            .chars()
            .map(|letter| SwappedLetter {
                letter,
                changed: false,
            })
            .collect();

        for swap in &self.swaps {
            for slot in &mut letters {
                if swap.contains(slot.letter) {
                    slot.letter = swap.apply(slot.letter);
                    slot.changed = true;
                }
            }
        }

        letters
    }

    /// Count the letters of a word that belong to some swap, repeats included
    ///
    /// # Examples
    /// ```
    /// use letter_swap::core::{Swap, SwapSet};
    ///
    /// let mut swaps = SwapSet::new();
    /// swaps.push(Swap::new('c', 'd').unwrap());
    /// assert_eq!(swaps.difficulty("cat"), 1);
    /// assert_eq!(swaps.difficulty("DOG"), 1);
    /// assert_eq!(swaps.difficulty("bird"), 1);
    /// ```
    #[must_use]
    pub fn difficulty(&self, word: &str) -> usize {
        difficulty_with(&self.letters(), word)
    }
}

/// Difficulty of a word given a precomputed set of swapped letters
#[must_use]
pub fn difficulty_with(swapped: &FxHashSet<char>, word: &str) -> usize {
    word.to_lowercase()
        .chars()
        .filter(|letter| swapped.contains(letter))
        .count()
}

impl<'a> IntoIterator for &'a SwapSet {
    type Item = &'a Swap;
    type IntoIter = std::slice::Iter<'a, Swap>;

    fn into_iter(self) -> Self::IntoIter {
        self.swaps.iter()
    }
}
