//! The GPU side of planet shading: WGSL source and the uniform blocks it reads.
//!
//! The host engine builds one material from [`PLANET_SHADER_WGSL`] and binds
//! the slots listed in [`UNIFORM_SLOTS`]. The math matches
//! [`shade_fragment`](super::fragment::shade_fragment).

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use super::style::PlanetStyle;

/// Vertex + fragment program for planet surfaces.
pub const PLANET_SHADER_WGSL: &str = include_str!("planet.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// A named uniform binding in the planet program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSlot {
    pub group: u32,
    pub binding: u32,
    /// WGSL variable name.
    pub name: &'static str,
    /// Size of the uniform block in bytes.
    pub size: usize,
}

pub const UNIFORM_SLOTS: [UniformSlot; 2] = [
    UniformSlot {
        group: 0,
        binding: 0,
        name: "camera",
        size: std::mem::size_of::<crate::renderer::camera::CameraUniform>(),
    },
    UniformSlot {
        group: 1,
        binding: 0,
        name: "planet",
        size: std::mem::size_of::<PlanetUniform>(),
    },
];

/// Per-planet uniform block. Layout matches `PlanetUniform` in WGSL.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PlanetUniform {
    pub model: [[f32; 4]; 4],
    pub style: u32,
    pub _pad: [u32; 3],
}

impl PlanetUniform {
    pub fn new(position: Vec3, rotation: Vec3, radius: f32, style: PlanetStyle) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            Quat::from_euler(glam::EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
            position,
        );
        Self {
            model: model.to_cols_array_2d(),
            style: style.index(),
            _pad: [0; 3],
        }
    }
}
