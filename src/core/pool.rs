//! Letter pool
//!
//! The letters still available for new swaps.

/// Sorted set of distinct lowercase letters `a`-`z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Build the pool from every letter appearing in a word list
    ///
    /// Words are lowercased; anything outside `a`-`z` is dropped.
    ///
    /// # Examples
    /// ```
    /// use letter_swap::core::LetterPool;
    ///
    /// let pool = LetterPool::from_words(&["Cat", "t-shirt"]);
    /// assert_eq!(pool.letters(), &['a', 'c', 'h', 'i', 'r', 's', 't']);
    /// ```
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut letters: Vec<char> = words
            .iter()
            .flat_map(|word| word.as_ref().to_lowercase().chars().collect::<Vec<_>>())
            .filter(char::is_ascii_lowercase)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Whether a new swap can be created
    #[inline]
    #[must_use]
    pub fn can_swap(&self) -> bool {
        self.letters.len() >= 2
    }

    /// Remove letters taken by a swap, along with any stray space
    pub fn remove(&mut self, taken: &[char]) {
        self.letters
            .retain(|letter| *letter != ' ' && !taken.contains(letter));
    }
}
