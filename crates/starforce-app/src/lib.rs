//! Headless Starforce host.
//!
//! Drives the engine from a fixed-rate thread and stands in for the
//! browser front end: commands go in over a channel, snapshots come out
//! through shared state.

pub mod error;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use starforce_core as core;
