//! Letter Swap - CLI
//!
//! Word guessing aid with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_swap::{
    commands::{SimulationConfig, run_simple, run_simulation, scores_after_swaps},
    core::Tier,
    game::{MAX_THRESHOLD, MIN_THRESHOLD, Session},
    output::{print_scores, print_session, print_simulation_result},
    wordlists::{WordLists, loader::load_from_dir},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "letter_swap",
    about = "Word guessing aid that scrambles tiered word lists with random letter swaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list tier: easy (default), medium or hard
    #[arg(short, long, global = true, default_value = "easy")]
    tier: Tier,

    /// Desired difficulty (1-15)
    #[arg(long, global = true, default_value_t = MIN_THRESHOLD, value_parser = parse_threshold)]
    threshold: usize,

    /// Seed for reproducible swaps and word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory with easy.txt, medium.txt and hard.txt to use instead of the built-in lists
    #[arg(short = 'w', long, global = true)]
    wordlists: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Print every word's difficulty after creating random swaps
    Scores {
        /// Number of random swaps to create first
        #[arg(short, long, default_value = "3")]
        swaps: usize,
    },

    /// Play many sessions automatically and report how long the words last
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn parse_threshold(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|v| (MIN_THRESHOLD..=MAX_THRESHOLD).contains(v))
        .ok_or_else(|| format!("must be a number from {MIN_THRESHOLD} to {MAX_THRESHOLD}"))
}

/// Load word lists based on the -w flag
fn load_wordlists(dir: Option<&Path>) -> Result<WordLists> {
    match dir {
        Some(dir) => load_from_dir(dir)
            .with_context(|| format!("Failed to load word lists from {}", dir.display())),
        None => Ok(WordLists::embedded()),
    }
}

/// Install the tracing subscriber
///
/// Filter: --debug > --verbose > `RUST_LOG` env > default "warn". In TUI mode logging
/// is off unless a log file is given, so the alternate screen stays clean.
fn init_tracing(cli: &Cli, tui: bool) -> Result<()> {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    init_tracing(&cli, matches!(command, Commands::Play))?;

    let lists = load_wordlists(cli.wordlists.as_deref())?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    info!(tier = %cli.tier, threshold = cli.threshold, seed = ?cli.seed, "Starting session");

    let session = Session::with_tier(&lists, cli.tier, rng).with_threshold(cli.threshold);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(session),
        Commands::Scores { swaps } => {
            run_scores_command(session, swaps);
            Ok(())
        }
        Commands::Simulate { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            run_simulate_command(&lists, cli.tier, cli.threshold, count, seed)
        }
    }
}

fn run_scores_command(mut session: Session<'_>, swaps: usize) {
    let scores = scores_after_swaps(&mut session, swaps);
    print_session(&session);
    print_scores(&scores);
}

fn run_simulate_command(
    lists: &WordLists,
    tier: Tier,
    threshold: usize,
    count: usize,
    seed: u64,
) -> Result<()> {
    println!("Simulating {count} {tier} sessions at difficulty ≤ {threshold} (seed {seed})...");

    let config = SimulationConfig::new(count, tier, threshold, seed);
    let result = run_simulation(lists, &config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(session: Session<'_>) -> Result<()> {
    use letter_swap::interactive::{App, run_tui};

    run_tui(App::new(session))
}
