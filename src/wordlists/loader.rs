//! Word list loading utilities
//!
//! Loads tier word lists from a directory, or copies the embedded constants.

use super::WordLists;
use crate::core::Tier;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a custom word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no words")]
    Empty(PathBuf),
}

/// Load a word list from a file
///
/// One word per line. Surrounding whitespace is trimmed and blank lines are skipped;
/// casing and punctuation are kept as written.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or `WordListError::Empty`
/// if it holds no words.
///
/// # Examples
/// ```no_run
/// use letter_swap::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    Ok(words)
}

/// Load all three tiers from `easy.txt`, `medium.txt` and `hard.txt` in a directory
///
/// # Errors
///
/// Fails if any of the three files is missing, unreadable, or empty.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<WordLists, WordListError> {
    let dir = dir.as_ref();
    let load = |tier: Tier| load_from_file(dir.join(format!("{}.txt", tier.name())));

    let lists = WordLists::new(load(Tier::Easy)?, load(Tier::Medium)?, load(Tier::Hard)?);

    tracing::info!(
        dir = %dir.display(),
        easy = lists.get(Tier::Easy).len(),
        medium = lists.get(Tier::Medium).len(),
        hard = lists.get(Tier::Hard).len(),
        "Loaded custom word lists"
    );

    Ok(lists)
}

/// Convert embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use letter_swap::wordlists::loader::words_from_slice;
/// use letter_swap::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
