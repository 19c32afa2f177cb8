//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use starforce_core::commands::PlayerCommand;
use starforce_core::enums::EngineState;
use starforce_core::state::FrameSnapshot;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward to the engine's command queue.
    Player(PlayerCommand),
    /// Destroy the engine and stop the thread.
    Shutdown,
}

/// Shared host state.
///
/// The sender sits behind a `Mutex` because `mpsc::Sender` is not `Sync`.
/// The latest snapshot is shared with the game loop thread.
pub struct AppState {
    /// `None` until the game loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Overwritten by the game loop after every frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a player command. Returns false when no loop is listening.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.send_raw(GameLoopCommand::Player(command))
    }

    pub fn shutdown(&self) -> bool {
        let sent = self.send_raw(GameLoopCommand::Shutdown);
        if let Ok(mut lock) = self.command_tx.lock() {
            *lock = None;
        }
        sent
    }

    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    fn send_raw(&self, message: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(lock) => lock
                .as_ref()
                .is_some_and(|tx| tx.send(message).is_ok()),
            Err(_) => false,
        }
    }
}

/// What the game loop reports when it stops.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub deaths: u32,
    pub meteors_destroyed: u32,
    pub survival_secs: f64,
    pub ship_alive: bool,
    pub final_state: EngineState,
}

impl SessionSummary {
    /// Fold the latest snapshot into the running totals.
    pub fn observe(&mut self, snapshot: &FrameSnapshot) {
        self.frames = snapshot.frame;
        self.elapsed_secs = snapshot.elapsed;
        self.meteors_destroyed = snapshot.score.meteors_destroyed;
        self.survival_secs = snapshot.score.survival_secs;
        self.ship_alive = snapshot.ship.alive;
        self.final_state = snapshot.state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
        assert!(!state.send(PlayerCommand::StartGame));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(PlayerCommand::Restart));
        assert!(state.shutdown());
        assert!(!state.send(PlayerCommand::StartGame));

        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Player(PlayerCommand::Restart))
        ));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));
    }

    #[test]
    fn test_summary_tracks_snapshot() {
        let mut summary = SessionSummary::default();
        let mut snapshot = FrameSnapshot {
            frame: 12,
            elapsed: 0.2,
            ..Default::default()
        };
        snapshot.score.meteors_destroyed = 3;
        snapshot.ship.alive = true;

        summary.observe(&snapshot);
        assert_eq!(summary.frames, 12);
        assert_eq!(summary.meteors_destroyed, 3);
        assert!(summary.ship_alive);
    }
}
