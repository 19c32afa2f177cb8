//! Cleanup system: kills entities that left the play volume.

use hecs::{Entity, World};

use starforce_core::components::{Bounds, Lifecycle};
use starforce_core::types::Transform;

use crate::queue::EntityQueue;
use crate::systems::damage;

/// Uses a caller-owned buffer to avoid per-frame allocation.
pub fn run(world: &mut World, queue: &mut EntityQueue, out_of_bounds: &mut Vec<Entity>) {
    out_of_bounds.clear();

    for (entity, (lifecycle, transform, bounds)) in
        world.query_mut::<(&Lifecycle, &Transform, &Bounds)>()
    {
        if lifecycle.alive && !bounds.contains(transform.position) {
            out_of_bounds.push(entity);
        }
    }

    for entity in out_of_bounds.drain(..) {
        damage::kill(world, queue, entity);
    }
}
