//! Word difficulty scoring
//!
//! A `DifficultyTable` maps every distinct word of a list (compared lowercased) to the
//! number of its letters touched by the active swaps. Tables are rebuilt from scratch
//! whenever they are needed; the lists are small and callers always want fresh values.

use crate::core::{SwapSet, difficulty_with};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// A word with its difficulty, in the casing it has in the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub difficulty: usize,
}

/// Difficulty of each distinct word in a list
#[derive(Debug, Clone)]
pub struct DifficultyTable<'a> {
    words: &'a [String],
    /// Lowercased words in first-occurrence order, with difficulty
    entries: Vec<(String, usize)>,
}

impl<'a> DifficultyTable<'a> {
    /// Score every word of the list against the swaps
    ///
    /// Words that are equal ignoring case collapse into one entry.
    #[must_use]
    pub fn compute(words: &'a [String], swaps: &SwapSet) -> Self {
        let swapped = swaps.letters();
        let mut seen = FxHashSet::default();

        let entries = words
            .iter()
            .map(|word| word.to_lowercase())
            .filter(|lower| seen.insert(lower.clone()))
            .map(|lower| {
                let difficulty = difficulty_with(&swapped, &lower);
                (lower, difficulty)
            })
            .collect();

        Self { words, entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(lowercase word, difficulty)` in list order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(word, difficulty)| (word.as_str(), *difficulty))
    }

    /// Difficulty of a word, looked up case-insensitively
    #[must_use]
    pub fn difficulty_of(&self, word: &str) -> Option<usize> {
        let lower = word.to_lowercase();
        self.entries
            .iter()
            .find(|(entry, _)| *entry == lower)
            .map(|(_, difficulty)| *difficulty)
    }

    /// The first list entry matching a lowercased word, or the word itself
    #[must_use]
    pub fn original_casing<'w>(&self, lower: &'w str) -> &'w str
    where
        'a: 'w,
    {
        self.words
            .iter()
            .find(|word| word.to_lowercase() == lower)
            .map_or(lower, String::as_str)
    }

    /// Every word not in `excluded`, hardest first, ties in ascending order
    ///
    /// Ties compare the original casing, so uppercase words sort before lowercase ones.
    #[must_use]
    pub fn score_all(&self, excluded: &[String]) -> Vec<ScoredWord> {
        let excluded = exclusion_set(excluded);

        let mut scored: Vec<ScoredWord> = self
            .iter()
            .filter(|(word, _)| !excluded.contains(*word))
            .map(|(word, difficulty)| ScoredWord {
                word: self.original_casing(word).to_string(),
                difficulty,
            })
            .collect();

        scored.sort_by(|a, b| match b.difficulty.cmp(&a.difficulty) {
            Ordering::Equal => a.word.cmp(&b.word),
            other => other,
        });

        scored
    }

    /// Words not in `excluded` with difficulty at most `threshold`, in list order
    #[must_use]
    pub fn candidates(&self, threshold: usize, excluded: &[String]) -> Vec<&str> {
        let excluded = exclusion_set(excluded);
        self.iter()
            .filter(|(word, difficulty)| *difficulty <= threshold && !excluded.contains(*word))
            .map(|(word, _)| word)
            .collect()
    }

    /// Whether any word outside `excluded` can be selected under `threshold`
    #[must_use]
    pub fn has_available(&self, threshold: usize, excluded: &[String]) -> bool {
        !self.candidates(threshold, excluded).is_empty()
    }

    /// Whether any word outside `excluded` is touched by at least one swap
    ///
    /// This is not the selection predicate. It answers "did the swaps change anything"
    /// and is what swap creation and tier changes use to enable selection.
    #[must_use]
    pub fn has_affected(&self, excluded: &[String]) -> bool {
        let excluded = exclusion_set(excluded);
        self.iter()
            .any(|(word, difficulty)| difficulty >= 1 && !excluded.contains(word))
    }
}

fn exclusion_set(excluded: &[String]) -> FxHashSet<String> {
    excluded.iter().map(|word| word.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Swap;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_string()).collect()
    }

    fn swaps(pairs: &[(char, char)]) -> SwapSet {
        let mut set = SwapSet::new();
        for &(a, b) in pairs {
            set.push(Swap::new(a, b).unwrap());
        }
        set
    }

    #[test]
    fn no_swaps_scores_zero() {
        let list = words(&["cat", "dog", "bird"]);
        let table = DifficultyTable::compute(&list, &SwapSet::new());

        assert!(table.iter().all(|(_, difficulty)| difficulty == 0));
        assert!(!table.has_affected(&[]));
        assert!(table.has_available(1, &[]));
    }

    #[test]
    fn swap_scores_members() {
        let list = words(&["cat", "dog", "fish"]);
        let table = DifficultyTable::compute(&list, &swaps(&[('c', 'd')]));

        assert_eq!(table.difficulty_of("cat"), Some(1));
        assert_eq!(table.difficulty_of("DOG"), Some(1));
        assert_eq!(table.difficulty_of("fish"), Some(0));
        assert_eq!(table.difficulty_of("cow"), None);
    }

    #[test]
    fn duplicates_collapse_case_insensitively() {
        let list = words(&["Paris", "paris", "cat"]);
        let table = DifficultyTable::compute(&list, &SwapSet::new());

        assert_eq!(table.len(), 2);
        assert_eq!(table.original_casing("paris"), "Paris");
    }

    #[test]
    fn original_casing_falls_back_to_input() {
        let list = words(&["cat"]);
        let table = DifficultyTable::compute(&list, &SwapSet::new());
        assert_eq!(table.original_casing("zebra"), "zebra");
    }

    #[test]
    fn score_all_sorts_hardest_first_then_by_word() {
        let list = words(&["tot", "cat", "act", "dog", "Tab"]);
        let table = DifficultyTable::compute(&list, &swaps(&[('t', 'x')]));
        let scored = table.score_all(&[]);

        let order: Vec<(&str, usize)> = scored
            .iter()
            .map(|s| (s.word.as_str(), s.difficulty))
            .collect();
        assert_eq!(
            order,
            vec![("tot", 2), ("Tab", 1), ("act", 1), ("cat", 1), ("dog", 0)]
        );
    }

    #[test]
    fn score_all_ties_put_capitalized_words_first() {
        let list = words(&["apple", "Monday", "London"]);
        let table = DifficultyTable::compute(&list, &SwapSet::new());
        let order: Vec<String> = table.score_all(&[]).into_iter().map(|s| s.word).collect();
        assert_eq!(order, vec!["London", "Monday", "apple"]);
    }

    #[test]
    fn score_all_skips_excluded() {
        let list = words(&["cat", "Dog", "bird"]);
        let table = DifficultyTable::compute(&list, &SwapSet::new());
        let scored = table.score_all(&words(&["dog"]));

        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|s| s.word != "Dog"));
    }

    #[test]
    fn predicates_are_distinct() {
        // Every word is affected, but none is within a threshold of 1
        let list = words(&["cdc", "dcd"]);
        let table = DifficultyTable::compute(&list, &swaps(&[('c', 'd')]));

        assert!(table.has_affected(&[]));
        assert!(!table.has_available(1, &[]));
        assert!(table.has_available(3, &[]));
    }

    #[test]
    fn predicates_respect_exclusions() {
        let list = words(&["cat", "fish"]);
        let table = DifficultyTable::compute(&list, &swaps(&[('c', 'd')]));

        assert!(table.has_affected(&[]));
        assert!(!table.has_affected(&words(&["cat"])));
        assert!(table.has_available(0, &words(&["cat"])));
        assert!(!table.has_available(0, &words(&["fish"])));
    }

    #[test]
    fn candidates_keep_list_order() {
        let list = words(&["fish", "Cat", "dog", "cdcd"]);
        let table = DifficultyTable::compute(&list, &swaps(&[('c', 'd')]));
        assert_eq!(table.candidates(1, &[]), vec!["fish", "cat", "dog"]);
    }
}
