//! Mirrors entity transforms into their collision bodies.

use hecs::World;

use starforce_core::components::{CollisionBody, Lifecycle};
use starforce_core::types::Transform;

pub fn run(world: &mut World) {
    for (_entity, (lifecycle, transform, body)) in
        world.query_mut::<(&Lifecycle, &Transform, &mut CollisionBody)>()
    {
        if lifecycle.alive {
            sync_body(transform, body);
        }
    }
}

pub fn sync_body(transform: &Transform, body: &mut CollisionBody) {
    body.position = transform.position;
    body.orientation = transform.orientation();
}
