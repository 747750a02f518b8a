//! Headless OUTPOST runner: plays the simulation for a fixed wall time and
//! logs a status line every second.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use outpost_app::config::load_config;
use outpost_app::state::AppState;
use outpost_core::commands::PlayerCommand;
use outpost_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "outpost")]
#[command(about = "Headless tower-defense simulation")]
struct Args {
    /// Wall-clock seconds to run before shutting down
    #[arg(long, default_value = "30")]
    seconds: u64,

    /// Place an opening tower at `x,y`
    #[arg(long, value_parser = parse_point)]
    place: Option<(f64, f64)>,

    /// Tower preset for the opening tower
    #[arg(long, default_value = "0")]
    preset: usize,

    /// JSON file with simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation speed multiplier (overrides the config file)
    #[arg(long)]
    time_scale: Option<f64>,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(time_scale) = args.time_scale {
        config.time_scale = time_scale;
    }

    let state = AppState::new();
    state.start(config).context("starting simulation")?;

    if let Some((x, y)) = args.place {
        state.send_command(PlayerCommand::SelectTowerPreset { index: args.preset })?;
        state.send_command(PlayerCommand::PlaceTower { x, y })?;
    }

    for _ in 0..args.seconds {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snap) = state.snapshot()? {
            info!(
                elapsed_secs = snap.time.elapsed_secs,
                wave = snap.wave.number,
                spawned = snap.wave.spawned,
                quota = snap.wave.quota,
                enemies = snap.enemies.len(),
                towers = snap.towers.len(),
                experience = snap.experience,
                kills = snap.score.enemies_killed,
                "status"
            );
        }
    }

    state.shutdown()?;
    Ok(())
}
