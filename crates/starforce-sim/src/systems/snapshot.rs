//! Snapshot system: queries the ECS world and builds a FrameSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use starforce_core::components::*;
use starforce_core::constants::SHIP_MAX_LIFE;
use starforce_core::state::{NodeView, ShipView};
use starforce_core::types::Transform;

/// Every live node, ordered by id.
pub fn build_nodes(world: &World) -> Vec<NodeView> {
    let mut query = world.query::<(&EntityMarker, &Lifecycle, &Transform, Option<&Glow>)>();
    let mut nodes: Vec<NodeView> = query
        .iter()
        .filter(|(_, (_, lifecycle, _, _))| lifecycle.alive)
        .map(|(entity, (marker, _, transform, glow))| NodeView {
            id: entity.to_bits().get(),
            kind: marker.kind,
            position: transform.position,
            rotation: transform.rotation,
            scale: transform.scale,
            glow: glow.map(Glow::intensity).unwrap_or(0.0),
            opacity: 1.0,
        })
        .collect();
    nodes.sort_by_key(|node| node.id);
    nodes
}

/// Status of the live ship, or a dead placeholder once it is gone.
pub fn build_ship(world: &World) -> ShipView {
    let mut query = world.query::<(&Lifecycle, &Health, &ShipState)>();
    query
        .iter()
        .find(|(_, (lifecycle, _, _))| lifecycle.alive)
        .map(|(_, (_, health, ship))| ShipView {
            alive: true,
            life: health.life,
            max_life: health.max_life,
            barrier_active: ship.barrier_active,
            barrier_opacity: ship.barrier_opacity,
        })
        .unwrap_or(ShipView {
            alive: false,
            life: 0,
            max_life: SHIP_MAX_LIFE,
            barrier_active: false,
            barrier_opacity: 0.0,
        })
}
