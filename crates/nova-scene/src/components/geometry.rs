use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One sphere vertex as uploaded to the GPU: 8 floats = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SphereVertex {
    pub const FLOATS: usize = 8;
}

/// UV sphere mesh. Generated once and shared read-only by every planet.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    /// Build a sphere with `width_segments` around the equator and
    /// `height_segments` from pole to pole. Pole rows emit one triangle per quad.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let normal = Vec3::new(
                    -(u * TAU).cos() * (v * PI).sin(),
                    (v * PI).cos(),
                    (u * TAU).sin() * (v * PI).sin(),
                );
                vertices.push(SphereVertex {
                    position: (normal * radius).to_array(),
                    normal: normal.to_array(),
                    uv: [u, 1.0 - v],
                });
            }
        }

        let row = w + 1;
        let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != h - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self {
            radius,
            width_segments: w,
            height_segments: h,
            vertices,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw pointer to interleaved vertex floats for the host's vertex buffer.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.indices.as_ptr()
    }
}
