//! Mesh metadata shared by every entity of a kind.
//!
//! The renderer owns the actual geometry; the engine only needs each mesh's
//! bounding-sphere radius to size collision bodies.

use std::collections::BTreeMap;

use starforce_core::enums::MeshId;

/// Radius used for a mesh that was never registered.
pub const FALLBACK_RADIUS: f32 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    radii: BTreeMap<MeshId, f32>,
}

impl AssetRegistry {
    /// Empty registry: every mesh falls back to [`FALLBACK_RADIUS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Radii of the stock meshes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.set_radius(MeshId::Ship, 12.0);
        // Unit rock, scaled by the meteor size.
        registry.set_radius(MeshId::Meteor, 1.0);
        // 8 x 8 x 30 box.
        registry.set_radius(MeshId::Bullet, (8.0f32 * 8.0 + 8.0 * 8.0 + 30.0 * 30.0).sqrt() / 2.0);
        registry
    }

    pub fn set_radius(&mut self, mesh: MeshId, radius: f32) {
        if radius.is_finite() && radius >= 0.0 {
            self.radii.insert(mesh, radius);
        } else {
            log::warn!("Ignoring invalid bounding radius {radius} for {mesh:?}");
        }
    }

    pub fn radius(&self, mesh: MeshId) -> f32 {
        self.radii.get(&mesh).copied().unwrap_or(FALLBACK_RADIUS)
    }

    /// Collision radius of `mesh` under a uniform `scale`.
    pub fn scaled_radius(&self, mesh: MeshId, scale: f32) -> f32 {
        self.radius(mesh) * scale
    }
}
