//! ECS systems that operate on the world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Spawns and kills go through the [`EntityQueue`](crate::queue::EntityQueue).

pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod glow;
pub mod lifetime;
pub mod movement;
pub mod plane;
pub mod ship;
pub mod snapshot;
pub mod sync;
