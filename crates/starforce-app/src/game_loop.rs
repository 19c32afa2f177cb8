//! Game loop thread. Runs the engine at 60Hz and publishes snapshots.
//!
//! Commands arrive over an `mpsc` channel. The latest snapshot is stored
//! in shared state for polling; sounds and events are written to the log.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starforce_core::events::EngineEvent;
use starforce_core::state::FrameSnapshot;
use starforce_sim::Engine;

use crate::error::AppError;
use crate::state::{GameLoopCommand, SessionSummary};

const TARGET_FPS: u64 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS);

/// Move `engine` onto a new thread and start the loop.
///
/// Returns the command sender and a handle that yields the session summary
/// once the loop stops.
pub fn spawn_game_loop(
    engine: Engine,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SessionSummary>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starforce-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot))
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown, channel disconnect, or an engine error.
fn run_game_loop(
    mut engine: Engine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> SessionSummary {
    let mut summary = SessionSummary::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    log::info!("Game loop started");
    'frames: loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    break 'frames;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let now = Instant::now();
        let delta_ms = (now - last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        let snapshot = match engine.frame(delta_ms) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("Game loop stopping: {err}");
                break;
            }
        };

        publish(&snapshot, &mut summary);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, drop the backlog
            next_frame_time = now;
        }
    }

    engine.destroy();
    summary.final_state = engine.state();
    log::info!(
        "Game loop stopped after {} frames ({} meteors destroyed)",
        summary.frames,
        summary.meteors_destroyed
    );
    summary
}

fn publish(snapshot: &FrameSnapshot, summary: &mut SessionSummary) {
    for sound in &snapshot.sounds {
        log::debug!("sound {sound:?}");
    }
    for event in &snapshot.events {
        match event {
            EngineEvent::Death => {
                summary.deaths += 1;
                log::info!(
                    "Ship destroyed after {:.1}s, {} meteors",
                    snapshot.score.survival_secs,
                    snapshot.score.meteors_destroyed
                );
            }
            EngineEvent::Pause | EngineEvent::Resume => log::info!("{event:?}"),
        }
    }
    summary.observe(snapshot);
}
