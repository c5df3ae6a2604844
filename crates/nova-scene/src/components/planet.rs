use std::rc::Rc;

use glam::Vec3;

use crate::api::types::PlanetId;
use crate::components::geometry::SphereGeometry;
use crate::shading::style::PlanetStyle;

/// A planet in the scene. Created once at init, mutated every step, never removed.
#[derive(Debug, Clone)]
pub struct Planet {
    /// Unique identifier.
    pub id: PlanetId,
    /// String tag for finding planets by name.
    pub tag: String,
    /// Position in world space.
    pub position: Vec3,
    /// Euler rotation (XYZ) in radians.
    pub rotation: Vec3,
    /// Rotation added per fixed step.
    pub spin: Vec3,
    /// Translation added per fixed step.
    pub drift: Vec3,
    /// World-space radius the shared unit geometry is scaled to.
    pub radius: f32,
    pub style: PlanetStyle,
    /// Shared sphere mesh.
    pub geometry: Rc<SphereGeometry>,
}

impl Planet {
    /// Create a planet at the origin using the shared `geometry`.
    pub fn new(id: PlanetId, geometry: Rc<SphereGeometry>) -> Self {
        Self {
            id,
            tag: String::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            spin: Vec3::ZERO,
            drift: Vec3::ZERO,
            radius: 1.0,
            style: PlanetStyle::DEFAULT,
            geometry,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_drift(mut self, drift: Vec3) -> Self {
        self.drift = drift;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_style(mut self, style: PlanetStyle) -> Self {
        self.style = style;
        self
    }

    /// Advance one fixed step: constant drift plus spin.
    pub fn step(&mut self) {
        self.position += self.drift;
        self.rotation += self.spin;
    }
}
