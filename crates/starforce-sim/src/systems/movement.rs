//! Kinematic integration system.
//!
//! position += velocity * speed; rotation += spin (per frame, not scaled).

use hecs::World;

use starforce_core::components::{Lifecycle, Motion};
use starforce_core::types::{FrameInfo, Transform};

pub fn run(world: &mut World, frame: &FrameInfo) {
    let speed = frame.speed_f32();
    for (_entity, (lifecycle, transform, motion)) in
        world.query_mut::<(&Lifecycle, &mut Transform, &Motion)>()
    {
        if !lifecycle.alive {
            continue;
        }
        transform.position += motion.velocity * speed;
        transform.rotation += motion.spin;
    }
}
