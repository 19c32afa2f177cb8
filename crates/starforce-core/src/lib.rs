//! Core types and definitions for the Starforce engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, cooldowns, controls, state snapshots, events,
//! configuration and constants. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod controls;
pub mod cooldown;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
