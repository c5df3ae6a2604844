use bytemuck::{Pod, Zeroable};

/// Per-planet render data read by the host renderer.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlanetInstance {
    pub position: [f32; 3],
    /// World-space radius the unit sphere is scaled to.
    pub radius: f32,
    /// Euler rotation (XYZ) in radians.
    pub rotation: [f32; 3],
    /// Surface style index, as a float.
    pub style: f32,
    /// Current background tint, repeated per instance for the host's convenience.
    pub tint: [f32; 3],
    pub _pad: f32,
}

impl PlanetInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Floats per star: x, y, z.
pub const STAR_FLOATS: usize = 3;

/// Render buffer containing planet instances and star positions.
pub struct RenderBuffer {
    pub instances: Vec<PlanetInstance>,
    /// Flat xyz triples.
    pub stars: Vec<f32>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(8),
            stars: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.stars.clear();
    }

    pub fn push(&mut self, instance: PlanetInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn star_count(&self) -> u32 {
        (self.stars.len() / STAR_FLOATS) as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.stars.as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
