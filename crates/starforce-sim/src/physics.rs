//! Collision world: sphere bodies, detection only.
//!
//! Bodies are registered when their entity is committed and unregistered when
//! it is removed. Stepping never moves anything (collision response is always
//! off); it reports every overlapping pair in registration order.

use hecs::{Entity, World};

use starforce_core::components::{CollisionBody, Lifecycle};

/// Overlap between two bodies reported by a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
    /// Sum of the radii minus the center distance. Positive on overlap.
    pub depth: f32,
}

#[derive(Debug, Default)]
pub struct CollisionWorld {
    bodies: Vec<Entity>,
    /// Total simulated time (ms).
    time: f64,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entity: Entity) {
        if !self.bodies.contains(&entity) {
            self.bodies.push(entity);
        }
    }

    /// Returns `true` if the entity had a body.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        match self.bodies.iter().position(|&e| e == entity) {
            Some(index) => {
                self.bodies.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.bodies.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance by `delta` ms and collect the contacts of this step.
    ///
    /// Bodies whose entity is dead or gone are skipped.
    pub fn step(&mut self, world: &World, delta: f64) -> Vec<Contact> {
        if delta > 0.0 {
            self.time += delta;
        }

        let spheres: Vec<_> = self
            .bodies
            .iter()
            .filter_map(|&entity| {
                let mut query = world.query_one::<(&CollisionBody, &Lifecycle)>(entity).ok()?;
                let (body, lifecycle) = query.get()?;
                lifecycle
                    .alive
                    .then_some((entity, body.position, body.radius))
            })
            .collect();

        let mut contacts = Vec::new();
        for (i, &(a, pos_a, radius_a)) in spheres.iter().enumerate() {
            for &(b, pos_b, radius_b) in &spheres[i + 1..] {
                let reach = radius_a + radius_b;
                let distance_sq = pos_a.distance_squared(pos_b);
                if distance_sq < reach * reach {
                    contacts.push(Contact {
                        a,
                        b,
                        depth: reach - distance_sq.sqrt(),
                    });
                }
            }
        }
        contacts
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}
