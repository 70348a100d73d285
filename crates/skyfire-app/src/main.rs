//! SKYFIRE headless host: runs a scripted session and reports the outcome.
//!
//! Usage:
//!   skyfire [--config skyfire.toml] [--seed 7] [--frames 3600] [--realtime]
//!   RUST_LOG=skyfire_sim=debug skyfire --restarts 3
//!   echo '{"type":"FireSpecial"}' | skyfire --stdin

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use skyfire_app::game_loop::{self, LoopOptions};
use skyfire_app::pilot::Pilot;
use skyfire_app::state::AppState;
use skyfire_core::config::GameConfig;

#[derive(Parser)]
#[command(name = "skyfire")]
#[command(about = "Run a headless SKYFIRE session driven by a scripted pilot")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Pace ticks at 60Hz instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// How many times the pilot restarts after a game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Also read JSON player commands from stdin, one per line; the session
    /// stops when the input ends
    #[arg(long)]
    stdin: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(seed = config.seed, frames = args.frames, "starting session");

    let state = AppState::new();
    let options = LoopOptions {
        max_frames: args.frames,
        realtime: args.realtime,
    };
    let (tx, handle) = game_loop::spawn_game_loop(
        config,
        options,
        Some(Box::new(Pilot::new(args.restarts))),
        state.latest_snapshot.clone(),
    )
    .context("spawning game loop thread")?;
    if args.stdin {
        state.attach(tx)?;
        let delivered = state.forward_commands(std::io::stdin().lock())?;
        tracing::info!(delivered, "command input closed");
        if let Err(e) = state.shutdown() {
            tracing::debug!(error = %e, "game loop already stopped");
        }
    } else {
        // Dropping the sender detaches the loop; it runs on scripted input alone.
        drop(tx);
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    println!("=== SESSION SUMMARY ===");
    println!("  Frames:      {}", summary.frames);
    println!("  Games over:  {}", summary.games_finished);
    println!("  Best score:  {}", summary.best_score);
    println!("  Peak draws:  {}", summary.peak_draw_calls);

    if args.json {
        let snapshot = state
            .snapshot()?
            .context("the loop finished without producing a snapshot")?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
