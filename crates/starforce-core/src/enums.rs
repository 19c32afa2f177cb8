//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Closed set of entity kinds. Collision handlers dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Meteor,
    Bullet,
    Scrap,
    Star,
    ReactorTrail,
    Plane,
}

impl EntityKind {
    /// Kinds that own a collision body.
    pub fn is_collidable(self) -> bool {
        matches!(self, EntityKind::Ship | EntityKind::Meteor | EntityKind::Bullet)
    }

    /// Kinds cleared by a restart.
    pub fn cleared_on_restart(self) -> bool {
        matches!(
            self,
            EntityKind::Ship | EntityKind::Meteor | EntityKind::Bullet | EntityKind::ReactorTrail
        )
    }
}

/// Engine lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Running,
    /// Tab unfocused, pointer off the canvas, or explicitly paused.
    PausedForFocusLoss,
    Destroyed,
}

/// Damage feedback state of a living entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlowState {
    Normal,
    Glowing,
    Dead,
}

/// How a [`Cooldown`](crate::cooldown::Cooldown) reacts to `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooldownPolicy {
    #[default]
    Saturating,
    Wrapping,
}

/// Meshes whose bounding sphere sizes a collision body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeshId {
    Ship,
    Meteor,
    Bullet,
}

/// Mouse buttons, numbered like DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left = 0,
    Wheel = 1,
    Right = 2,
}

impl MouseButton {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Wheel),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// Keyboard keys, numbered like legacy DOM key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Shift = 16,
    Escape = 27,
    Space = 32,
    End = 35,
    Home = 36,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
    Delete = 46,
    P = 80,
    R = 82,
}

impl KeyCode {
    pub fn from_code(code: u32) -> Option<Self> {
        let key = match code {
            8 => KeyCode::Backspace,
            9 => KeyCode::Tab,
            13 => KeyCode::Enter,
            16 => KeyCode::Shift,
            27 => KeyCode::Escape,
            32 => KeyCode::Space,
            35 => KeyCode::End,
            36 => KeyCode::Home,
            37 => KeyCode::Left,
            38 => KeyCode::Up,
            39 => KeyCode::Right,
            40 => KeyCode::Down,
            46 => KeyCode::Delete,
            80 => KeyCode::P,
            82 => KeyCode::R,
            _ => return None,
        };
        Some(key)
    }
}

/// Any input the controls manager can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Key(KeyCode),
    Mouse(MouseButton),
}
