//! NEONDRIFT headless runner binary.
//!
//! Spins up the game loop thread, starts a run, and polls snapshots until
//! the run ends or the requested tick count elapses.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use neondrift_app::game_loop::{spawn_game_loop, TICK_DURATION};
use neondrift_app::state::{GameLoopCommand, SharedSnapshot};
use neondrift_core::commands::PlayerCommand;
use neondrift_core::config::SimTuning;
use neondrift_core::enums::GamePhase;
use neondrift_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "neondrift", about = "Headless hovercraft run simulator")]
struct Cli {
    /// RNG seed for the track streamer.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many simulation ticks (0 = run until the run ends).
    #[arg(long, default_value_t = 900)]
    ticks: u64,

    /// Simulation speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Constant steering input in [-1, 1].
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    steering: f64,

    /// Path to a JSON tuning override file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let tuning = match &cli.config {
        Some(path) => SimTuning::load(path)
            .with_context(|| format!("loading tuning config {}", path.display()))?,
        None => SimTuning::default(),
    };

    let config = SimConfig {
        seed: cli.seed,
        tuning,
        time_scale: cli.speed,
        ..SimConfig::default()
    };

    info!(seed = cli.seed, ticks = cli.ticks, "starting run");

    let shared: SharedSnapshot = Arc::new(Mutex::new(None));
    let (tx, handle) = spawn_game_loop(config, shared.clone());

    tx.send(GameLoopCommand::Player(PlayerCommand::StartRun))?;
    if cli.steering != 0.0 {
        tx.send(GameLoopCommand::Player(PlayerCommand::SetSteering {
            value: cli.steering,
        }))?;
    }

    // Poll the shared snapshot at a coarse interval and report progress.
    let mut last_reported_tick = 0;
    loop {
        std::thread::sleep(TICK_DURATION * 15);

        let snap = match shared.lock() {
            Ok(lock) => lock.clone(),
            Err(_) => break,
        };
        let Some(snap) = snap else { continue };

        if snap.time.tick >= last_reported_tick + 30 {
            last_reported_tick = snap.time.tick;
            info!(
                tick = snap.time.tick,
                distance = format!("{:.1}", snap.craft.position.track_coord()),
                height = format!("{:.2}", snap.craft.position.0.y),
                segments = snap.active_segments,
                "progress"
            );
        }

        for event in &snap.events {
            info!(?event, "event");
        }

        if snap.phase == GamePhase::GameOver {
            info!(
                tick = snap.time.tick,
                distance = format!("{:.1}", snap.craft.position.track_coord()),
                "run over"
            );
            break;
        }
        if cli.ticks > 0 && snap.time.tick >= cli.ticks {
            break;
        }
    }

    tx.send(GameLoopCommand::Shutdown).ok();
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    Ok(())
}
