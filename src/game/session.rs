//! Game session state
//!
//! The `Session` owns everything a game needs: the active tier, the letter pool, the
//! swaps, the selection history and the "choose next word" flag. All mutation goes
//! through its methods, and every derived value is recomputed from scratch.

use super::difficulty::{DifficultyTable, ScoredWord};
use super::selector::{self, Selection};
use crate::core::{LetterPool, Swap, SwapSet, SwappedLetter, Tier};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::debug;

/// Lowest selectable difficulty threshold
pub const MIN_THRESHOLD: usize = 1;
/// Highest selectable difficulty threshold
pub const MAX_THRESHOLD: usize = 15;

/// Whether a word is currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    WordSelected,
}

/// A single game session over a set of tier word lists
#[derive(Debug)]
pub struct Session<'a, R = StdRng> {
    lists: &'a WordLists,
    tier: Tier,
    pool: LetterPool,
    swaps: SwapSet,
    history: Vec<String>,
    current: Option<String>,
    threshold: usize,
    selection_enabled: bool,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session on the easy tier
    pub fn new(lists: &'a WordLists, rng: R) -> Self {
        Self::with_tier(lists, Tier::Easy, rng)
    }

    /// Start a session on a given tier
    pub fn with_tier(lists: &'a WordLists, tier: Tier, rng: R) -> Self {
        let mut session = Self {
            lists,
            tier,
            pool: LetterPool::default(),
            swaps: SwapSet::new(),
            history: Vec::new(),
            current: None,
            threshold: MIN_THRESHOLD,
            selection_enabled: false,
            rng,
        };
        session.reset_for_tier();
        session
    }

    /// Set the starting threshold, clamped to 1..=15
    ///
    /// Unlike `set_threshold` this leaves the "choose next word" flag alone, so a fresh
    /// session stays disabled until a swap affects some word.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD);
        self
    }

    /// Switch the active word list
    ///
    /// Rebuilds the pool and forgets the history and current word. Swaps are kept,
    /// including swaps on letters the new list never uses, and their letters stay out
    /// of the rebuilt pool.
    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
        self.reset_for_tier();
        debug!(%tier, pool = self.pool.len(), swaps = self.swaps.len(), "Tier changed");
    }

    fn reset_for_tier(&mut self) {
        let swapped: Vec<char> = self.swaps.letters().into_iter().collect();
        self.pool = LetterPool::from_words(self.words());
        self.pool.remove(&swapped);
        self.history.clear();
        self.current = None;
        self.selection_enabled = self.table().has_affected(&[]);
    }

    /// Create a swap from two random pool letters
    ///
    /// Returns `None` without changing anything when fewer than two letters remain.
    pub fn create_swap(&mut self) -> Option<Swap> {
        if !self.pool.can_swap() {
            return None;
        }

        let picked = index::sample(&mut self.rng, self.pool.len(), 2);
        let letters = self.pool.letters();
        let swap = Swap::new(letters[picked.index(0)], letters[picked.index(1)])?;
        self.add_swap(swap);
        Some(swap)
    }

    /// Create a swap between two chosen letters
    ///
    /// Both letters must still be in the pool and must differ.
    pub fn create_swap_between(&mut self, first: char, second: char) -> Option<Swap> {
        let first = first.to_ascii_lowercase();
        let second = second.to_ascii_lowercase();
        if !self.pool.contains(first) || !self.pool.contains(second) {
            return None;
        }

        let swap = Swap::new(first, second)?;
        self.add_swap(swap);
        Some(swap)
    }

    fn add_swap(&mut self, swap: Swap) {
        let (first, second) = swap.letters();
        self.swaps.push(swap);
        self.pool.remove(&[first, second]);
        self.selection_enabled = self.table().has_affected(&self.history);

        debug!(
            %swap,
            pool = self.pool.len(),
            enabled = self.selection_enabled,
            "Swap created"
        );
    }

    /// Change the difficulty threshold, clamped to 1..=15
    ///
    /// Returns the threshold actually stored.
    pub fn set_threshold(&mut self, threshold: usize) -> usize {
        self.threshold = threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD);
        self.selection_enabled = self.table().has_available(self.threshold, &self.history);
        self.threshold
    }

    /// Choose the next word using the current threshold
    pub fn select_next(&mut self) -> Option<&str> {
        self.select_next_with(self.threshold)
    }

    /// Choose the next word with difficulty at most `target`
    ///
    /// On success the word becomes current and enters the history. When nothing is
    /// left, the current word is cleared and selection is disabled.
    pub fn select_next_with(&mut self, target: usize) -> Option<&str> {
        let selection = selector::select_next(
            self.lists.get(self.tier),
            &self.swaps,
            &self.history,
            target,
            &mut self.rng,
        );

        match selection {
            Selection::Picked {
                word,
                key,
                difficulty,
                more_remaining,
            } => {
                debug!(%word, difficulty, target, more_remaining, "Word selected");
                self.history.push(key);
                self.selection_enabled = more_remaining;
                self.current = Some(word);
                self.current.as_deref()
            }
            Selection::Exhausted => {
                debug!(target, seen = self.history.len(), "No word left under target");
                self.current = None;
                self.selection_enabled = false;
                None
            }
        }
    }

    /// Difficulty table of the active list against the current swaps
    #[must_use]
    pub fn table(&self) -> DifficultyTable<'a> {
        DifficultyTable::compute(self.lists.get(self.tier), &self.swaps)
    }

    /// Every word not yet shown, hardest first
    #[must_use]
    pub fn scores(&self) -> Vec<ScoredWord> {
        self.table().score_all(&self.history)
    }

    /// Whether any unseen word fits under `threshold`
    #[must_use]
    pub fn has_available(&self, threshold: usize) -> bool {
        self.table().has_available(threshold, &self.history)
    }

    /// Whether any unseen word is touched by a swap
    #[must_use]
    pub fn has_affected(&self) -> bool {
        self.table().has_affected(&self.history)
    }

    /// Render a word through the swaps
    #[must_use]
    pub fn apply_swaps(&self, word: &str) -> String {
        self.swaps.apply(word)
    }

    /// Render a word through the swaps with changed letters flagged
    #[must_use]
    pub fn apply_swaps_highlighted(&self, word: &str) -> Vec<SwappedLetter> {
        self.swaps.apply_highlighted(word)
    }

    #[must_use]
    pub fn current_difficulty(&self) -> Option<usize> {
        self.current.as_deref().map(|word| self.swaps.difficulty(word))
    }
}

impl<R> Session<'_, R> {
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.lists.get(self.tier)
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub const fn swaps(&self) -> &SwapSet {
        &self.swaps
    }

    /// Lowercase forms of the words shown since the last tier change
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the "choose next word" control is enabled
    #[must_use]
    pub const fn is_selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Whether the "create swap" control is enabled
    #[must_use]
    pub fn can_create_swap(&self) -> bool {
        self.pool.can_swap()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::WordSelected
        } else {
            SessionState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn session(lists: &WordLists, seed: u64) -> Session<'_> {
        Session::new(lists, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn new_session_starts_idle_on_easy() {
        let lists = WordLists::uniform(&["cat", "dog", "bird"]);
        let session = session(&lists, 0);

        assert_eq!(session.tier(), Tier::Easy);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.threshold(), MIN_THRESHOLD);
        assert!(session.history().is_empty());
        assert!(session.swaps().is_empty());
    }

    #[test]
    fn no_swaps_means_selection_disabled() {
        let lists = WordLists::uniform(&["cat", "dog", "bird"]);
        let session = session(&lists, 0);

        assert!(session.table().iter().all(|(_, difficulty)| difficulty == 0));
        assert!(!session.has_affected());
        assert!(!session.is_selection_enabled());
    }

    #[test]
    fn pool_comes_from_active_list() {
        let lists = WordLists::new(
            vec!["ab".to_string()],
            vec!["cd".to_string()],
            vec!["Ef-g".to_string()],
        );
        let mut session = session(&lists, 0);
        assert_eq!(session.pool().letters(), &['a', 'b']);

        session.set_tier(Tier::Hard);
        assert_eq!(session.pool().letters(), &['e', 'f', 'g']);
    }

    #[test]
    fn create_swap_removes_letters_and_enables_selection() {
        let lists = WordLists::uniform(&["cat", "dog", "bird"]);
        let mut session = session(&lists, 5);
        let before = session.pool().len();

        let swap = session.create_swap().unwrap();
        let (a, b) = swap.letters();

        assert_ne!(a, b);
        assert_eq!(session.pool().len(), before - 2);
        assert!(!session.pool().contains(a));
        assert!(!session.pool().contains(b));
        assert_eq!(session.swaps().len(), 1);
        // Every letter of the pool appears in some word
        assert!(session.is_selection_enabled());
    }

    #[test]
    fn create_swap_disabled_below_two_letters() {
        let lists = WordLists::uniform(&["abc"]);
        let mut session = session(&lists, 1);

        assert!(session.create_swap().is_some());
        assert!(!session.can_create_swap());
        assert!(session.create_swap().is_none());
        assert_eq!(session.swaps().len(), 1);
        assert_eq!(session.pool().len(), 1);
    }

    #[test]
    fn swapped_letters_never_picked_again() {
        let lists = WordLists::embedded();
        let mut session = session(&lists, 11);
        let mut used = std::collections::HashSet::new();

        while let Some(swap) = session.create_swap() {
            let (a, b) = swap.letters();
            assert!(used.insert(a), "{a} picked twice");
            assert!(used.insert(b), "{b} picked twice");
        }

        assert!(session.pool().len() < 2);
    }

    #[test]
    fn create_swap_between_scores_words() {
        let lists = WordLists::uniform(&["cat", "dog", "fish"]);
        let mut session = session(&lists, 0);

        let swap = session.create_swap_between('c', 'D').unwrap();
        assert_eq!(swap.letters(), ('c', 'd'));

        let table = session.table();
        assert_eq!(table.difficulty_of("cat"), Some(1));
        assert_eq!(table.difficulty_of("dog"), Some(1));
        assert_eq!(table.difficulty_of("fish"), Some(0));
        assert_eq!(session.apply_swaps("Cat"), "dat");
    }

    #[test]
    fn create_swap_between_requires_pool_letters() {
        let lists = WordLists::uniform(&["cat", "dog"]);
        let mut session = session(&lists, 0);

        assert!(session.create_swap_between('c', 'z').is_none());
        assert!(session.create_swap_between('c', 'c').is_none());
        assert!(session.create_swap_between('c', 'd').is_some());
        assert!(session.create_swap_between('c', 'a').is_none());
        assert_eq!(session.swaps().len(), 1);
    }

    #[test]
    fn select_until_exhausted() {
        let lists = WordLists::uniform(&["cat", "dog", "cdcd"]);
        let mut session = session(&lists, 9);
        session.create_swap_between('c', 'd').unwrap();
        assert_eq!(session.set_threshold(1), 1);

        let first = session.select_next().unwrap().to_string();
        assert_eq!(session.state(), SessionState::WordSelected);
        assert!(session.is_selection_enabled());

        let second = session.select_next().unwrap().to_string();
        assert_ne!(first, second);
        assert!(!session.is_selection_enabled());

        let mut picked = vec![first, second];
        picked.sort();
        assert_eq!(picked, vec!["cat", "dog"]);
        assert_eq!(session.history().len(), 2);

        assert!(session.select_next().is_none());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.current_word().is_none());
        assert!(!session.is_selection_enabled());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn select_keeps_original_casing() {
        let lists = WordLists::uniform(&["Paris"]);
        let mut session = session(&lists, 0);

        assert_eq!(session.select_next_with(15), Some("Paris"));
        assert_eq!(session.history(), ["paris"]);
        assert_eq!(session.current_difficulty(), Some(0));
    }

    #[test]
    fn select_never_repeats() {
        let lists = WordLists::embedded();
        let mut session = session(&lists, 21);
        let mut seen = std::collections::HashSet::new();

        while let Some(word) = session.select_next_with(MAX_THRESHOLD) {
            assert!(seen.insert(word.to_lowercase()), "{word} shown twice");
        }

        assert_eq!(seen.len(), session.table().len());
    }

    #[test]
    fn scores_hide_history() {
        let lists = WordLists::uniform(&["cat", "dog"]);
        let mut session = session(&lists, 2);

        let word = session.select_next_with(5).unwrap().to_string();
        let scores = session.scores();
        assert_eq!(scores.len(), 1);
        assert_ne!(scores[0].word, word);
    }

    #[test]
    fn threshold_is_clamped() {
        let lists = WordLists::uniform(&["cat"]);
        let mut session = session(&lists, 0);

        assert_eq!(session.set_threshold(0), MIN_THRESHOLD);
        assert_eq!(session.set_threshold(99), MAX_THRESHOLD);
        assert_eq!(session.threshold(), MAX_THRESHOLD);
    }

    #[test]
    fn starting_threshold_keeps_selection_disabled() {
        let lists = WordLists::uniform(&["cat", "dog", "bird"]);
        let mut session =
            Session::with_tier(&lists, Tier::Easy, StdRng::seed_from_u64(0)).with_threshold(1);

        assert_eq!(session.threshold(), 1);
        assert!(session.swaps().is_empty());
        assert!(!session.is_selection_enabled());

        let clamped = Session::new(&lists, StdRng::seed_from_u64(0)).with_threshold(40);
        assert_eq!(clamped.threshold(), MAX_THRESHOLD);
        assert!(!clamped.is_selection_enabled());

        session.create_swap_between('c', 'd').unwrap();
        assert!(session.is_selection_enabled());
    }

    #[test]
    fn threshold_uses_selection_predicate() {
        let lists = WordLists::uniform(&["cdcd", "dcdc"]);
        let mut session = session(&lists, 0);
        session.create_swap_between('c', 'd').unwrap();

        // Swap creation only asks whether anything is affected
        assert!(session.is_selection_enabled());

        session.set_threshold(3);
        assert!(!session.is_selection_enabled());

        session.set_threshold(4);
        assert!(session.is_selection_enabled());
    }

    #[test]
    fn tier_change_resets_history_but_keeps_swaps() {
        let lists = WordLists::new(
            vec!["cat".to_string(), "dog".to_string()],
            vec!["coda".to_string(), "fish".to_string()],
            vec!["zzz".to_string()],
        );
        let mut session = session(&lists, 4);
        session.create_swap_between('c', 'd').unwrap();
        session.select_next_with(5).unwrap();

        session.set_tier(Tier::Medium);

        assert_eq!(session.tier(), Tier::Medium);
        assert!(session.history().is_empty());
        assert!(session.current_word().is_none());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.swaps().len(), 1);
        // The pool is rebuilt from the new list without the swapped letters
        assert_eq!(session.pool().letters(), &['a', 'f', 'h', 'i', 'o', 's']);
        assert!(session.is_selection_enabled());

        session.set_tier(Tier::Hard);
        assert_eq!(session.swaps().len(), 1);
        assert!(!session.is_selection_enabled());
    }

    #[test]
    fn highlighted_current_word() {
        let lists = WordLists::uniform(&["dog"]);
        let mut session = session(&lists, 0);
        session.create_swap_between('d', 'g').unwrap();
        let word = session.select_next_with(5).unwrap().to_string();

        let letters = session.apply_swaps_highlighted(&word);
        let rendered: String = letters.iter().map(|l| l.letter).collect();
        assert_eq!(rendered, "god");
        assert_eq!(
            letters.iter().map(|l| l.changed).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert_eq!(session.current_difficulty(), Some(2));
    }
}
