//! Letter Swap
//!
//! A word guessing aid: letters are swapped in random pairs, and words from a tiered
//! list are shown scrambled by the active swaps, picked by how many of their letters
//! the swaps touch.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_swap::game::Session;
//! use letter_swap::wordlists::WordLists;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let lists = WordLists::uniform(&["cat", "dog", "fish"]);
//! let mut session = Session::new(&lists, StdRng::seed_from_u64(7));
//!
//! session.create_swap_between('c', 'd');
//! session.set_threshold(1);
//!
//! let word = session.select_next().unwrap().to_string();
//! println!("{word} -> {}", session.apply_swaps(&word));
//! ```

// Core domain types
pub mod core;

// Difficulty scoring, selection and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
