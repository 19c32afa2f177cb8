//! Advances every glow flash by the frame delta.

use hecs::World;

use starforce_core::components::{Glow, Lifecycle};
use starforce_core::types::FrameInfo;

pub fn run(world: &mut World, frame: &FrameInfo) {
    for (_entity, (lifecycle, glow)) in world.query_mut::<(&Lifecycle, &mut Glow)>() {
        if lifecycle.alive {
            glow.cooldown.tick(frame.delta);
        }
    }
}
