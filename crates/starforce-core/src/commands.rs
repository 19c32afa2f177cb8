//! Host commands sent from the input/UI layer to the engine.
//!
//! Commands are queued and applied at the next frame boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::Control;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input edges ---
    /// A key or mouse button went down.
    Press { control: Control },
    /// A key or mouse button went up.
    Release { control: Control },
    /// The pointer moved. `target` is its projection on the play plane.
    PointerMoved {
        target: Option<Vec3>,
        on_screen: bool,
    },

    // --- Pause conditions ---
    /// The browser tab (or window) gained or lost focus.
    FocusChanged { active: bool },
    /// Explicit pause toggle from the UI.
    SetPaused { paused: bool },

    // --- Viewport ---
    /// Far corners of the visible play area, where meteors spawn.
    SetSpawnArea {
        left: Option<Vec3>,
        right: Option<Vec3>,
    },

    // --- Game flow ---
    /// Leave the menu: meteor waves begin.
    StartGame,
    /// Fresh ship, no meteors, bullets or trails.
    Restart,
}
