//! Events emitted by the engine for the UI and audio collaborators.

use serde::{Deserialize, Serialize};

/// Lifecycle notifications for the UI layer. At most one per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The ship was destroyed.
    Death,
    /// The engine stopped simulating (focus lost or explicit pause).
    Pause,
    /// The engine went back to simulating.
    Resume,
}

/// Sound effects the audio collaborator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Laser,
    Shield,
    Explosion,
    GameOver,
    Welcome,
    Go,
}

/// Fire-and-forget audio request. The engine never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SoundRequest {
    Play {
        sound: Sound,
        /// Start delay in milliseconds.
        delay_ms: u32,
    },
    Stop { sound: Sound },
}

impl SoundRequest {
    pub fn play(sound: Sound) -> Self {
        SoundRequest::Play { sound, delay_ms: 0 }
    }

    pub fn play_delayed(sound: Sound, delay_ms: u32) -> Self {
        SoundRequest::Play { sound, delay_ms }
    }

    pub fn stop(sound: Sound) -> Self {
        SoundRequest::Stop { sound }
    }
}
