//! Game logic
//!
//! Difficulty scoring, word selection and the session that ties them together.

pub mod difficulty;
pub mod selector;
mod session;

pub use difficulty::{DifficultyTable, ScoredWord};
pub use selector::Selection;
pub use session::{MAX_THRESHOLD, MIN_THRESHOLD, Session, SessionState};
