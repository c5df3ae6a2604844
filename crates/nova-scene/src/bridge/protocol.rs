//! Shared frame buffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 20 floats  (view_proj column-major, eye xyzw)]
//! [Planets: max_planets × 12 floats]
//! [Stars: star_count × 3 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets.

use crate::api::config::SceneConfig;
use crate::api::scene::SceneContext;
use crate::api::types::SceneEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{PlanetInstance, RenderBuffer, STAR_FLOATS};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_PLANETS: usize = 2;
pub const HEADER_PLANET_COUNT: usize = 3;
pub const HEADER_STAR_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
/// 1.0 while a zoom is running.
pub const HEADER_ANIMATING: usize = 7;
pub const HEADER_TINT_R: usize = 8;
pub const HEADER_TINT_G: usize = 9;
pub const HEADER_TINT_B: usize = 10;
/// Hovered zone index, -1 when nothing is hovered.
pub const HEADER_HOVER_ZONE: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per camera uniform.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;
/// Floats per planet instance.
pub const PLANET_FLOATS: usize = PlanetInstance::FLOATS;
/// Floats per scene event: kind, a, b, c.
pub const EVENT_FLOATS: usize = SceneEvent::FLOATS;

#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_planets: usize,
    pub star_count: usize,
    pub max_events: usize,

    pub planet_data_floats: usize,
    pub star_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    pub planet_data_offset: usize,
    pub star_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_planets: usize, star_count: usize, max_events: usize) -> Self {
        let planet_data_floats = max_planets * PLANET_FLOATS;
        let star_data_floats = star_count * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let planet_data_offset = camera_offset + CAMERA_FLOATS;
        let star_data_offset = planet_data_offset + planet_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_planets,
            star_count,
            max_events,
            planet_data_floats,
            star_data_floats,
            event_data_floats,
            camera_offset,
            planet_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_planets, config.star_count, config.max_events)
    }
}

/// Write one frame into `out`, resizing it to the layout's total.
/// Sections past their capacity are truncated; unused slots are zeroed.
pub fn pack_frame(
    layout: &ProtocolLayout,
    frame_counter: u64,
    ctx: &SceneContext,
    render: &RenderBuffer,
    out: &mut Vec<f32>,
) {
    out.clear();
    out.resize(layout.buffer_total_floats, 0.0);

    let planets = &render.instances[..render.instances.len().min(layout.max_planets)];
    let stars = &render.stars[..render.stars.len().min(layout.star_data_floats)];
    let events = &ctx.events[..ctx.events.len().min(layout.max_events)];
    if events.len() < ctx.events.len() {
        log::debug!("dropped {} scene events past capacity", ctx.events.len() - events.len());
    }

    let tint = ctx.tint.current();
    let header = &mut out[..HEADER_FLOATS];
    header[HEADER_FRAME_COUNTER] = frame_counter as f32;
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_MAX_PLANETS] = layout.max_planets as f32;
    header[HEADER_PLANET_COUNT] = planets.len() as f32;
    header[HEADER_STAR_COUNT] = (stars.len() / STAR_FLOATS) as f32;
    header[HEADER_MAX_EVENTS] = layout.max_events as f32;
    header[HEADER_EVENT_COUNT] = events.len() as f32;
    header[HEADER_ANIMATING] = if ctx.animator.is_idle() { 0.0 } else { 1.0 };
    header[HEADER_TINT_R] = tint.x;
    header[HEADER_TINT_G] = tint.y;
    header[HEADER_TINT_B] = tint.z;
    header[HEADER_HOVER_ZONE] = ctx.hover.as_ref().map_or(-1.0, |h| h.zone as f32);

    let camera = ctx.camera.uniform();
    write_section(out, layout.camera_offset, bytemuck::cast_slice(std::slice::from_ref(&camera)));
    write_section(out, layout.planet_data_offset, bytemuck::cast_slice(planets));
    write_section(out, layout.star_data_offset, stars);
    write_section(out, layout.event_data_offset, bytemuck::cast_slice(events));
}

#[inline]
fn write_section(out: &mut [f32], offset: usize, data: &[f32]) {
    out[offset..offset + data.len()].copy_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::InputEvent;
    use crate::systems::render::build_render_buffer;
    use glam::Vec3;

    fn context() -> SceneContext {
        SceneContext::new(SceneConfig {
            star_count: 16,
            max_planets: 2,
            max_events: 2,
            sphere_width_segments: 8,
            sphere_height_segments: 4,
            ..SceneConfig::default()
        })
    }

    #[test]
    fn default_config_layout() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());
        assert_eq!(layout.camera_offset, 16);
        assert_eq!(layout.planet_data_offset, 36);
        assert_eq!(layout.star_data_offset, 36 + 6 * 12);
        assert_eq!(layout.event_data_offset, 36 + 6 * 12 + 5000 * 3);
        assert_eq!(layout.buffer_total_floats, 36 + 6 * 12 + 5000 * 3 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(3, 7, 5);
        assert_eq!(layout.planet_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.star_data_offset, layout.planet_data_offset + layout.planet_data_floats);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn packs_header_and_sections() {
        let mut ctx = context();
        let planet = ctx.new_planet().with_position(Vec3::new(4.0, 5.0, 6.0));
        ctx.planets.spawn(planet);
        ctx.handle_input(
            &InputEvent::HoverEnter { zone: 0, description: String::new(), color: "#000000".into() },
            0.0,
        );

        let layout = ProtocolLayout::from_config(&ctx.config);
        let mut render = RenderBuffer::new();
        build_render_buffer(&ctx, &mut render);
        let mut out = Vec::new();
        pack_frame(&layout, 7, &ctx, &render, &mut out);

        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(out[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_PLANET_COUNT], 1.0);
        assert_eq!(out[HEADER_STAR_COUNT], 16.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(out[HEADER_ANIMATING], 1.0);
        assert_eq!(out[HEADER_HOVER_ZONE], 0.0);

        let eye = layout.camera_offset + 16;
        assert_eq!(&out[eye..eye + 3], &[0.0, 0.0, 50.0]);
        let p = layout.planet_data_offset;
        assert_eq!(&out[p..p + 3], &[4.0, 5.0, 6.0]);
        let e = layout.event_data_offset;
        assert_eq!(out[e], SceneEvent::HOVER_ENTER);
        assert_eq!(out[e + EVENT_FLOATS], SceneEvent::ZOOM_STARTED);
    }

    #[test]
    fn events_past_capacity_are_truncated() {
        let mut ctx = context();
        for _ in 0..5 {
            ctx.emit_event(SceneEvent::new(9.0, 0.0, 0.0, 0.0));
        }
        let layout = ProtocolLayout::from_config(&ctx.config);
        let mut out = Vec::new();
        pack_frame(&layout, 0, &ctx, &RenderBuffer::new(), &mut out);
        assert_eq!(out[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(out[HEADER_HOVER_ZONE], -1.0);
    }
}
