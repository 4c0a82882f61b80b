//! Command implementations

pub mod scores;
pub mod simple;
pub mod simulate;

pub use scores::scores_after_swaps;
pub use simple::{Command, apply_command, parse_command, run_simple};
pub use simulate::{SimulationConfig, SimulationResult, play_session, run_simulation};
