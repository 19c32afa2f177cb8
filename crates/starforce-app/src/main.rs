use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use glam::Vec3;

use starforce_app::error::AppError;
use starforce_app::game_loop;
use starforce_app::logging;
use starforce_app::state::AppState;
use starforce_core::commands::PlayerCommand;
use starforce_core::config::EngineConfig;
use starforce_core::constants::{PLANE_HALF, PLANE_QUARTER};
use starforce_core::enums::{Control, MouseButton};
use starforce_sim::assets::AssetRegistry;
use starforce_sim::Engine;

/// Run a headless Starforce session and print its summary as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine config (JSON). Missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wall-clock length of the session.
    #[arg(short, long, default_value_t = 10.0)]
    seconds: f64,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Hold the fire button for the whole session.
    #[arg(long)]
    autofire: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<EngineConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
                path: path.display().to_string(),
                source,
            })?;
            EngineConfig::from_json(&json)?
        }
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn session_length(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = load_config(&args)?;
    log::info!("Starting session (seed {})", config.seed);
    let engine = Engine::new(config, AssetRegistry::with_defaults())?;

    let state = AppState::new();
    let (tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())?;
    if let Ok(mut lock) = state.command_tx.lock() {
        *lock = Some(tx);
    }

    state.send(PlayerCommand::SetSpawnArea {
        left: Some(Vec3::new(-PLANE_QUARTER, 0.0, -PLANE_HALF)),
        right: Some(Vec3::new(PLANE_QUARTER, 0.0, -PLANE_HALF)),
    });
    state.send(PlayerCommand::PointerMoved {
        target: Some(Vec3::ZERO),
        on_screen: true,
    });
    state.send(PlayerCommand::StartGame);
    if args.autofire {
        state.send(PlayerCommand::Press {
            control: Control::Mouse(MouseButton::Left),
        });
    }

    std::thread::sleep(session_length(args.seconds));
    state.shutdown();

    let summary = handle.join().map_err(|_| AppError::LoopPanicked)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
