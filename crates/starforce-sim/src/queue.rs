//! Pending entity mutations, applied once per frame at commit.
//!
//! Systems never spawn into or despawn from the live world directly: they
//! push a built component bundle or a kill here, and the engine merges both
//! lists at the frame boundary.

use hecs::{Entity, EntityBuilder};

#[derive(Default)]
pub struct EntityQueue {
    additions: Vec<EntityBuilder>,
    removals: Vec<Entity>,
}

impl EntityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, builder: EntityBuilder) {
        self.additions.push(builder);
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.removals.push(entity);
    }

    pub fn pending_additions(&self) -> usize {
        self.additions.len()
    }

    pub fn pending_removals(&self) -> &[Entity] {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Hand both lists to the committer, leaving the queue empty.
    pub fn take(&mut self) -> (Vec<Entity>, Vec<EntityBuilder>) {
        (
            std::mem::take(&mut self.removals),
            std::mem::take(&mut self.additions),
        )
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }
}
