use bytemuck::{Pod, Zeroable};

/// Unique identifier for a planet in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetId(pub u32);

/// A scene event communicated from Rust to the host via the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SceneEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SceneEvent {
    pub const FLOATS: usize = 4;

    /// `a` = hovered zone index.
    pub const HOVER_ENTER: f32 = 1.0;
    pub const HOVER_LEAVE: f32 = 2.0;
    /// `a` = planet index (-1 for origin), `b` = zoom id.
    pub const ZOOM_STARTED: f32 = 3.0;
    /// `a` = planet index (-1 for origin), `b` = zoom id.
    pub const ZOOM_FINISHED: f32 = 4.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// Hover metadata reported by the UI layer, read from element attributes.
/// The strings are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverInfo {
    pub zone: usize,
    pub description: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<SceneEvent>(), SceneEvent::FLOATS * 4);
    }
}
