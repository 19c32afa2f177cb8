//! Game engine for Starforce.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces FrameSnapshots for the renderer.

pub mod assets;
pub mod engine;
pub mod error;
pub mod physics;
pub mod queue;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::Engine;
pub use error::EngineError;
pub use starforce_core as core;
