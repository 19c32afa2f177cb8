//! Simulation constants and tuning parameters.

use std::f32::consts::PI;

/// Nominal frame budget at 60 fps (milliseconds).
pub const SIXTY_FPS_MS: f64 = 1000.0 / 60.0;

/// Speed deviation from 1.0 at which a frame is reported as a spike.
pub const SPEED_SPIKE_THRESHOLD: f64 = 1.0;

// --- Play volume ---

const PLANE_MULTIPLIER: f32 = 2.5;

/// Edge length of the scrolling plane.
pub const PLANE_SIZE: f32 = PLANE_MULTIPLIER * 10_000.0;

/// Half-extent of the cubic play volume.
pub const PLANE_HALF: f32 = PLANE_SIZE / 2.0;

/// The ship is confined to this half-extent on every axis.
pub const PLANE_QUARTER: f32 = PLANE_HALF / 2.0;

/// Grid lines per side of the plane.
pub const PLANE_GRID_NB: f32 = PLANE_MULTIPLIER * 100.0;

/// Distance between two grid lines; the plane scroll wraps on it.
pub const PLANE_STEP: f32 = PLANE_SIZE / PLANE_GRID_NB;

/// Meteors and stars behind the camera past this depth are dropped.
pub const BEHIND_CAMERA_Z: f32 = 5000.0;

/// Base plane scroll per nominal frame.
pub const PLANE_SCROLL_SPEED: f32 = 5.0;

// --- Ship ---

pub const SHIP_SCALE: f32 = 6.0;
pub const SHIP_MAX_LIFE: i32 = 3;
pub const SHIP_CONTACT_DAMAGE: i32 = 10;
pub const SHIP_STEER_FACTOR: f32 = 0.2;
pub const SHIP_VELOCITY_DECAY: f32 = 0.2;
pub const SHIP_BANK_FACTOR: f32 = PI * 0.006;
pub const SHIP_MAX_BANK: f32 = PI / 4.0;

/// Barrier opacity gained per frame while the shield is held.
pub const BARRIER_FADE_IN: f32 = 0.03;
/// Barrier opacity multiplier per frame once released.
pub const BARRIER_FADE_OUT: f32 = 0.55;
pub const BARRIER_MAX_OPACITY: f32 = 0.1;

/// Delay between the ship's death and the game-over jingle.
pub const GAMEOVER_SOUND_DELAY_MS: u32 = 600;

// --- Bullets ---

pub const BULLET_DAMAGE: i32 = 2;
pub const BULLET_SPREAD: f32 = 2.0;
pub const BULLET_FORWARD_SPEED: f32 = -30.0;
/// Muzzle offset in ship-local units, multiplied by the ship scale.
pub const BULLET_MUZZLE_X: f32 = 5.0;
pub const BULLET_MUZZLE_Z: f32 = -13.0;

// --- Reactor trail ---

pub const REACTOR_TRAIL_LIFE: u32 = 8;
pub const REACTOR_TRAIL_OFFSET_Z: f32 = 8.0;
pub const REACTOR_TRAIL_SPEED: f32 = 5.0;
pub const REACTOR_TRAIL_SPEED_FACTOR: f32 = 0.8;

// --- Scrap ---

/// Debris pieces spawned by a dying ship or meteor.
pub const SCRAP_COUNT: usize = 4;
pub const SCRAP_LIFE: u32 = 15;
pub const SCRAP_MAX_SCALE: f32 = 20.0;
/// Each velocity component lies in `[-SCRAP_VELOCITY_RANGE, SCRAP_VELOCITY_RANGE)`.
pub const SCRAP_VELOCITY_RANGE: f32 = 10.0;
pub const SCRAP_SPIN_RANGE: f32 = 1e-2;

// --- Meteors ---

pub const METEOR_LIFE_DIVISOR: f32 = 2.0;
pub const METEOR_DAMAGE_DIVISOR: f32 = 5.0;

// --- Stars ---

pub const STAR_MIN_SCALE: f32 = 5.0;
pub const STAR_MAX_SCALE: f32 = 30.0;
pub const STAR_SPIN_RANGE: f32 = 5e-2;
/// Stars never spawn closer than this to the plane.
pub const STAR_Y_OFFSET: f32 = PLANE_HALF / 5.0;
pub const STAR_DEPTH_SPEED: f32 = 10_000.0;
