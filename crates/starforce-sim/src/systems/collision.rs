//! Contact resolution: pairwise collision handlers dispatched on entity kind.
//!
//! Every contact is delivered in both directions. Damage lands immediately,
//! so an entity killed here is already dead for the update pass.

use hecs::{Entity, World};

use starforce_core::components::{ContactDamage, EntityMarker, Glow};
use starforce_core::enums::EntityKind;

use crate::physics::Contact;
use crate::systems::damage::{self, DamageContext};

pub fn resolve(world: &mut World, contacts: &[Contact], ctx: &mut DamageContext) {
    for contact in contacts {
        collide_with(world, contact.a, contact.b, ctx);
        collide_with(world, contact.b, contact.a, ctx);
    }
}

/// Let `this` react to touching `other`.
pub fn collide_with(world: &mut World, this: Entity, other: Entity, ctx: &mut DamageContext) {
    if !damage::is_alive(world, this) || !damage::is_alive(world, other) {
        return;
    }
    let (Some(this_kind), Some(other_kind)) = (kind_of(world, this), kind_of(world, other)) else {
        return;
    };

    match (this_kind, other_kind) {
        (EntityKind::Ship, EntityKind::Meteor) => ship_hits_meteor(world, this, other, ctx),
        (EntityKind::Bullet, EntityKind::Meteor) => bullet_hits_meteor(world, this, other, ctx),
        // Meteors take their damage from the other side.
        _ => {}
    }
}

fn kind_of(world: &World, entity: Entity) -> Option<EntityKind> {
    world.get::<&EntityMarker>(entity).ok().map(|marker| marker.kind)
}

fn contact_damage(world: &World, entity: Entity) -> i32 {
    world
        .get::<&ContactDamage>(entity)
        .map(|damage| damage.damage)
        .unwrap_or(0)
}

/// Mutual damage, unless the ship is inside its invincibility window.
fn ship_hits_meteor(world: &mut World, ship: Entity, meteor: Entity, ctx: &mut DamageContext) {
    let ready = world
        .get::<&Glow>(ship)
        .map(|glow| glow.cooldown.can_trigger())
        .unwrap_or(true);
    if !ready {
        return;
    }
    let ship_damage = contact_damage(world, ship);
    let meteor_damage = contact_damage(world, meteor);
    damage::take_damage(world, meteor, ship_damage, ctx);
    damage::take_damage(world, ship, meteor_damage, ctx);
}

fn bullet_hits_meteor(world: &mut World, bullet: Entity, meteor: Entity, ctx: &mut DamageContext) {
    let bullet_damage = contact_damage(world, bullet);
    damage::take_damage(world, meteor, bullet_damage, ctx);
    damage::kill(world, ctx.queue, bullet);
}
