use nova_scene::{
    build_render_buffer, pack_frame, CameraUniform, ConfigurationError, FixedTimestep, FrameClock, InputEvent,
    InputQueue, ProtocolLayout, RenderBuffer, SceneConfig, SceneContext, Showcase,
};

use crate::hover::HoverTarget;

/// Generic scene runner that wires up the frame loop.
///
/// Each showcase crate creates a `thread_local!` SceneRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SceneRunner<S: Showcase> {
    showcase: S,
    ctx: SceneContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    clock: FrameClock,
    layout: ProtocolLayout,
    camera_uniform: CameraUniform,
    /// Packed frame, see `nova_scene::bridge::protocol`.
    frame: Vec<f32>,
    frame_counter: u64,
    hover_targets: Vec<HoverTarget>,
    initialized: bool,
}

impl<S: Showcase> SceneRunner<S> {
    /// Build a runner from the showcase's own config.
    pub fn new(showcase: S) -> Result<Self, ConfigurationError> {
        let config = showcase.config();
        Self::with_config(showcase, config)
    }

    /// Build a runner from an explicit config, e.g. one loaded from JSON.
    pub fn with_config(showcase: S, config: SceneConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let ctx = SceneContext::new(config);

        Ok(Self {
            showcase,
            camera_uniform: ctx.camera.uniform(),
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            clock: FrameClock::new(),
            frame: vec![0.0; layout.buffer_total_floats],
            layout,
            frame_counter: 0,
            hover_targets: Vec::new(),
            initialized: false,
        })
    }

    /// Initialize the showcase. Call once after construction.
    pub fn init(&mut self) {
        self.showcase.init(&mut self.ctx);
        if self.ctx.planets.len() > self.layout.max_planets {
            log::warn!(
                "{} planets spawned but only {} fit the frame buffer",
                self.ctx.planets.len(),
                self.layout.max_planets
            );
        }
        build_render_buffer(&self.ctx, &mut self.render_buffer);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame at host time `now_ms`.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        let dt = self.clock.delta_seconds(now_ms);

        for event in self.input.iter() {
            self.ctx.handle_input(event, now_ms);
        }
        self.showcase.update(&mut self.ctx, &self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.step();
        }
        self.ctx.sample_camera(now_ms);

        build_render_buffer(&self.ctx, &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();

        self.frame_counter += 1;
        pack_frame(
            &self.layout,
            self.frame_counter,
            &self.ctx,
            &self.render_buffer,
            &mut self.frame,
        );
    }

    /// Replace the bound hover targets (see [`crate::hover`]).
    pub fn set_hover_targets(&mut self, targets: Vec<HoverTarget>) {
        self.hover_targets = targets;
    }

    /// Queue a hover-enter for `zone` using the attributes bound to it.
    /// Returns `false` if no target is bound for that zone.
    pub fn hover_zone(&mut self, zone: usize) -> bool {
        match self.hover_targets.iter().find(|t| t.zone == zone) {
            Some(target) => {
                let event = target.enter_event();
                self.input.push(event);
                true
            }
            None => {
                log::warn!("no hover target bound for zone {}", zone);
                false
            }
        }
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    // ---- Pointer accessors for host reads ----

    pub fn planets_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn planet_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.render_buffer.stars_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.render_buffer.star_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    /// Capped at `max_events`, like the packed frame.
    pub fn events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn sphere_vertices_ptr(&self) -> *const f32 {
        self.ctx.geometry().vertices_ptr()
    }

    pub fn sphere_vertex_count(&self) -> u32 {
        self.ctx.geometry().vertex_count() as u32
    }

    pub fn sphere_indices_ptr(&self) -> *const u32 {
        self.ctx.geometry().indices_ptr()
    }

    pub fn sphere_index_count(&self) -> u32 {
        self.ctx.geometry().indices.len() as u32
    }

    pub fn hover_description(&self) -> String {
        self.ctx.hover_description().to_owned()
    }

    pub fn is_animating(&self) -> bool {
        !self.ctx.animator.is_idle()
    }

    // ---- Capacity accessors ----

    pub fn max_planets(&self) -> u32 {
        self.layout.max_planets as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_scene::{PlanetStyle, SceneEvent};
    use glam::Vec3;

    struct TwoPlanets;

    impl Showcase for TwoPlanets {
        fn config(&self) -> SceneConfig {
            SceneConfig {
                star_count: 32,
                sphere_width_segments: 8,
                sphere_height_segments: 4,
                ..SceneConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut SceneContext) {
            for (i, style) in [PlanetStyle::Terran, PlanetStyle::GasGiant].into_iter().enumerate() {
                let planet = ctx
                    .new_planet()
                    .with_position(Vec3::new(i as f32 * 10.0, 0.0, -30.0))
                    .with_style(style);
                ctx.planets.spawn(planet);
            }
        }
    }

    fn runner() -> SceneRunner<TwoPlanets> {
        let mut runner = SceneRunner::new(TwoPlanets).unwrap();
        runner.init();
        runner
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig { zoom_duration_ms: 0.0, ..SceneConfig::default() };
        assert!(SceneRunner::with_config(TwoPlanets, config).is_err());
    }

    #[test]
    fn frames_step_at_fixed_rate() {
        let mut runner = runner();
        runner.frame(0.0);
        let z0 = runner.context().camera.position.z;
        // 110 ms at 60 Hz is six steps.
        runner.frame(110.0);
        let z1 = runner.context().camera.position.z;
        assert!((z0 - z1 - 6.0 * 0.02).abs() < 1e-4, "moved {}", z0 - z1);
        assert_eq!(runner.frame_counter(), 2);
        assert_eq!(runner.planet_count(), 2);
        assert_eq!(runner.star_count(), 32);
    }

    #[test]
    fn clicking_zone_runs_zoom_to_completion() {
        let mut runner = runner();
        runner.frame(0.0);
        runner.push_input(InputEvent::Click { zone: Some(1) });
        runner.frame(16.0);
        assert!(runner.is_animating());
        assert_eq!(runner.events_len(), 1);

        runner.frame(2016.0);
        assert!(!runner.is_animating());
        let expected = Vec3::new(10.0, 0.0, -30.0) - runner.context().config.zoom_offset;
        assert_eq!(runner.context().camera.position, expected);
        assert_eq!(runner.context().events[0].kind, SceneEvent::ZOOM_FINISHED);
    }

    #[test]
    fn frame_before_init_does_nothing() {
        let mut runner = SceneRunner::new(TwoPlanets).unwrap();
        runner.frame(0.0);
        assert_eq!(runner.frame_counter(), 0);
    }

    #[test]
    fn hover_zone_uses_bound_attributes() {
        let mut runner = runner();
        runner.set_hover_targets(vec![HoverTarget {
            zone: 0,
            id: "planet-0".into(),
            description: "Home".into(),
            color: "#3366ff".into(),
        }]);
        assert!(runner.hover_zone(0));
        assert!(!runner.hover_zone(4));
        runner.frame(0.0);
        assert_eq!(runner.hover_description(), "Home");
    }

    #[test]
    fn event_reads_agree_with_packed_frame() {
        let config = SceneConfig { max_events: 2, ..TwoPlanets.config() };
        let mut runner = SceneRunner::with_config(TwoPlanets, config).unwrap();
        runner.init();
        runner.push_input(InputEvent::HoverEnter { zone: 0, description: String::new(), color: String::new() });
        runner.push_input(InputEvent::HoverLeave);
        runner.frame(0.0);

        assert_eq!(runner.context().events.len(), 3);
        assert_eq!(runner.events_len(), 2);
        assert_eq!(runner.frame[nova_scene::bridge::protocol::HEADER_EVENT_COUNT], 2.0);
    }

    #[test]
    fn packed_frame_matches_layout() {
        let mut runner = runner();
        runner.frame(0.0);
        assert_eq!(runner.frame.len(), runner.buffer_total_floats() as usize);
        assert!(runner.sphere_index_count() > 0);
    }
}
