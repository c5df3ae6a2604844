//! CPU reference of the planet fragment program.

use glam::{Vec2, Vec3};

use super::spherical::spherical_uv;
use super::style::{style_color, PlanetStyle};

/// Direction of the single directional light, before normalization.
pub const LIGHT_DIR: Vec3 = Vec3::ONE;

/// Shading result of one fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Unlit surface color.
    pub color: Vec3,
    /// Lighting factor in [0.5, 1].
    pub light: f32,
}

impl Fragment {
    /// Final color: surface color scaled by the lighting term.
    pub fn lit(&self) -> Vec3 {
        self.color * self.light
    }
}

/// Half-Lambert term: a surface facing away from the light keeps half
/// of its unlit color.
pub fn lambert(normal: Vec3) -> f32 {
    let n = normal.normalize_or_zero();
    n.dot(LIGHT_DIR.normalize()).clamp(0.0, 1.0) * 0.5 + 0.5
}

/// Shade one fragment from its surface normal.
pub fn shade_fragment(normal: Vec3, style: PlanetStyle) -> Fragment {
    let uv: Vec2 = spherical_uv(normal);
    Fragment {
        color: style_color(style, uv),
        light: lambert(normal),
    }
}
