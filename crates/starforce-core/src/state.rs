//! Frame snapshot: everything the renderer, UI and audio layers need after a frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{EngineEvent, SoundRequest};

/// Complete visible state handed off after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub state: EngineState,
    /// Frames simulated while running.
    pub frame: u64,
    /// Milliseconds reported by the host for this frame.
    pub delta: f64,
    pub speed: f64,
    /// Seconds of simulated time.
    pub elapsed: f64,
    pub has_game_started: bool,
    pub nodes: Vec<NodeView>,
    pub ship: ShipView,
    pub score: ScoreView,
    pub sounds: Vec<SoundRequest>,
    pub events: Vec<EngineEvent>,
}

impl FrameSnapshot {
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.nodes.iter().filter(|node| node.kind == kind).count()
    }
}

/// One renderable node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    /// Stable for the lifetime of the entity.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Emissive strength, 0.0 when not glowing.
    pub glow: f32,
    pub opacity: f32,
}

/// Player ship status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub alive: bool,
    pub life: i32,
    pub max_life: i32,
    pub barrier_active: bool,
    pub barrier_opacity: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub meteors_destroyed: u32,
    /// Seconds survived since the game started. Frozen once the ship dies.
    pub survival_secs: f64,
}
