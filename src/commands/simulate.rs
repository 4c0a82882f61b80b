//! Simulation command
//!
//! Plays many seeded sessions the way a player would and reports how long the word
//! supply lasts.

use crate::core::Tier;
use crate::game::Session;
use crate::wordlists::WordLists;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub sessions: usize,
    pub tier: Tier,
    pub threshold: usize,
    /// Session `i` is seeded with `seed + i`
    pub seed: u64,
    /// Upper bound on actions per session
    pub max_steps: usize,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(sessions: usize, tier: Tier, threshold: usize, seed: u64) -> Self {
        Self {
            sessions,
            tier,
            threshold,
            seed,
            max_steps: 10_000,
        }
    }
}

/// What happened in one simulated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub words_shown: usize,
    pub swaps_created: usize,
    /// No candidate was left under the threshold at the end
    pub exhausted: bool,
}

/// Aggregate result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub tier: Tier,
    pub threshold: usize,
    pub sessions: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub average_swaps: f64,
    pub exhausted: usize,
    pub duration: Duration,
}

/// Play one session to the end
///
/// Chooses a word while the control is enabled, otherwise creates a swap, and stops
/// when neither action is possible.
pub fn play_session(
    lists: &WordLists,
    tier: Tier,
    threshold: usize,
    seed: u64,
    max_steps: usize,
) -> SessionOutcome {
    let mut session =
        Session::with_tier(lists, tier, StdRng::seed_from_u64(seed)).with_threshold(threshold);

    let mut words_shown = 0;
    for _ in 0..max_steps {
        if session.is_selection_enabled() {
            if session.select_next().is_some() {
                words_shown += 1;
            }
        } else if session.create_swap().is_none() {
            break;
        }
    }

    SessionOutcome {
        words_shown,
        swaps_created: session.swaps().len(),
        exhausted: !session.has_available(session.threshold()),
    }
}

/// Run every session of the simulation in parallel
///
/// # Errors
///
/// Returns an error if the progress bar template is rejected.
pub fn run_simulation(lists: &WordLists, config: &SimulationConfig) -> Result<SimulationResult> {
    let start = Instant::now();

    let pb = ProgressBar::new(config.sessions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} tier", config.tier));

    let outcomes: Vec<SessionOutcome> = (0..config.sessions)
        .into_par_iter()
        .map(|i| {
            let outcome = play_session(
                lists,
                config.tier,
                config.threshold,
                config.seed.wrapping_add(i as u64),
                config.max_steps,
            );
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    Ok(summarize(config, &outcomes, start.elapsed()))
}

fn summarize(
    config: &SimulationConfig,
    outcomes: &[SessionOutcome],
    duration: Duration,
) -> SimulationResult {
    let sessions = outcomes.len();
    let total_words: usize = outcomes.iter().map(|o| o.words_shown).sum();
    let total_swaps: usize = outcomes.iter().map(|o| o.swaps_created).sum();
    let divisor = sessions.max(1) as f64;

    SimulationResult {
        tier: config.tier,
        threshold: config.threshold,
        sessions,
        average_words: total_words as f64 / divisor,
        min_words: outcomes.iter().map(|o| o.words_shown).min().unwrap_or(0),
        max_words: outcomes.iter().map(|o| o.words_shown).max().unwrap_or(0),
        average_swaps: total_swaps as f64 / divisor,
        exhausted: outcomes.iter().filter(|o| o.exhausted).count(),
        duration,
    }
}
