use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::animation::camera::{CameraAnimator, ZoomId};
use crate::api::config::SceneConfig;
use crate::api::types::{HoverInfo, PlanetId, SceneEvent};
use crate::components::geometry::SphereGeometry;
use crate::components::planet::Planet;
use crate::core::planets::PlanetSet;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::starfield::{Starfield, StarfieldConfig};
use crate::systems::tint::BackgroundTint;

/// The contract every showcase must fulfill.
pub trait Showcase {
    /// Return scene configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Spawn planets and set up the scene.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Per-frame hook, called after the built-in input handling and before
    /// the fixed steps.
    fn update(&mut self, _ctx: &mut SceneContext, _input: &InputQueue) {}
}

/// Where a zoom request sends the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomTarget {
    /// In front of the planet with this spawn index.
    Planet(usize),
    /// Back to the initial camera position.
    Origin,
}

impl ZoomTarget {
    /// Planet index on the wire, `-1` for the origin.
    pub fn wire_index(self) -> f32 {
        match self {
            ZoomTarget::Planet(index) => index as f32,
            ZoomTarget::Origin => -1.0,
        }
    }
}

/// Mutable scene state, passed to `Showcase::init` and `Showcase::update`.
///
/// Every field has one writer: input handling owns `pointer` and `hover`,
/// the animator owns `camera.position` while a zoom runs, drift owns it
/// otherwise, and parallax owns `camera.look_dir`.
pub struct SceneContext {
    pub config: SceneConfig,
    pub camera: PerspectiveCamera,
    pub planets: PlanetSet,
    pub starfield: Starfield,
    pub animator: CameraAnimator,
    pub tint: BackgroundTint,
    /// Last pointer position in normalized device coordinates.
    pub pointer: Vec2,
    pub hover: Option<HoverInfo>,
    pub events: Vec<SceneEvent>,
    origin: Vec3,
    geometry: Rc<SphereGeometry>,
    zoom_target: Option<ZoomTarget>,
    next_id: u32,
}

impl SceneContext {
    pub fn new(config: SceneConfig) -> Self {
        let camera = PerspectiveCamera::new(
            config.camera_start,
            config.fov_y_degrees,
            config.aspect,
            config.near,
            config.far,
        );
        let starfield = Starfield::generate(
            StarfieldConfig {
                count: config.star_count,
                spread: config.star_spread,
                depth: config.star_depth,
                near: config.star_near,
            },
            config.star_seed,
        );
        let geometry = Rc::new(SphereGeometry::uv_sphere(
            1.0,
            config.sphere_width_segments,
            config.sphere_height_segments,
        ));

        Self {
            camera,
            planets: PlanetSet::with_capacity(config.max_planets),
            starfield,
            animator: CameraAnimator::new(config.zoom_duration_ms, config.zoom_easing),
            tint: BackgroundTint::new(config.tint_base, config.tint_lerp),
            pointer: Vec2::ZERO,
            hover: None,
            events: Vec::with_capacity(config.max_events),
            origin: config.camera_start,
            geometry,
            zoom_target: None,
            next_id: 1,
            config,
        }
    }

    /// Generate the next unique planet ID.
    pub fn next_id(&mut self) -> PlanetId {
        let id = PlanetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The sphere mesh shared by every planet.
    pub fn geometry(&self) -> Rc<SphereGeometry> {
        Rc::clone(&self.geometry)
    }

    /// A fresh planet with a new ID and the shared geometry, ready for the builder methods.
    pub fn new_planet(&mut self) -> Planet {
        let id = self.next_id();
        Planet::new(id, self.geometry())
    }

    /// Camera position that "zoom to origin" returns to.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Emit a scene event to be forwarded to the host.
    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub fn hover_description(&self) -> &str {
        self.hover.as_ref().map_or("", |h| h.description.as_str())
    }

    /// Apply one host input event.
    pub fn handle_input(&mut self, event: &InputEvent, now_ms: f64) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(*x, *y);
                self.camera.look_with_offset(self.pointer * self.config.parallax);
            }
            InputEvent::HoverEnter { zone, description, color } => {
                self.tint.set_target_hex(color);
                self.hover = Some(HoverInfo {
                    zone: *zone,
                    description: description.clone(),
                    color: color.clone(),
                });
                self.emit_event(SceneEvent::new(SceneEvent::HOVER_ENTER, *zone as f32, 0.0, 0.0));
                self.zoom_to(ZoomTarget::Planet(*zone), now_ms);
            }
            InputEvent::HoverLeave => {
                if let Some(previous) = self.hover.take() {
                    self.emit_event(SceneEvent::new(
                        SceneEvent::HOVER_LEAVE,
                        previous.zone as f32,
                        0.0,
                        0.0,
                    ));
                }
                self.tint.reset();
            }
            InputEvent::Click { zone: Some(index) } | InputEvent::ZoomTo { index } => {
                self.zoom_to(ZoomTarget::Planet(*index), now_ms);
            }
            InputEvent::Click { zone: None } | InputEvent::ZoomOrigin => {
                self.zoom_to(ZoomTarget::Origin, now_ms);
            }
            InputEvent::Resize { width, height } => {
                self.camera.set_viewport(*width, *height);
            }
            InputEvent::Custom { .. } => {}
        }
    }

    /// Camera destination for `target`, or `None` for an unknown planet.
    pub fn resolve_target(&self, target: ZoomTarget) -> Option<Vec3> {
        match target {
            ZoomTarget::Planet(index) => self
                .planets
                .at(index)
                .map(|planet| planet.position - self.config.zoom_offset),
            ZoomTarget::Origin => Some(self.origin),
        }
    }

    /// Start a zoom from the current camera position, replacing any zoom in flight.
    pub fn zoom_to(&mut self, target: ZoomTarget, now_ms: f64) -> Option<ZoomId> {
        let Some(destination) = self.resolve_target(target) else {
            log::warn!("zoom to unknown planet {:?} ignored", target);
            return None;
        };

        let id = self.animator.start(self.camera.position, destination, now_ms);
        self.zoom_target = Some(target);
        self.emit_event(SceneEvent::new(
            SceneEvent::ZOOM_STARTED,
            target.wire_index(),
            id.0 as f32,
            0.0,
        ));
        log::info!("zoom {} to {:?} started", id.0, target);
        Some(id)
    }

    /// One fixed step: camera drift (idle only), planet motion, star recycling, tint.
    pub fn step(&mut self) {
        if self.animator.is_idle() {
            self.camera.position += self.config.camera_drift;
        }
        for planet in self.planets.iter_mut() {
            planet.step();
        }
        self.starfield.recycle(self.camera.position.z);
        self.tint.step();
    }

    /// Move the camera to the animator's sample for `now_ms`.
    pub fn sample_camera(&mut self, now_ms: f64) {
        let Some(sample) = self.animator.sample(now_ms) else {
            return;
        };
        self.camera.position = sample.position;

        if sample.finished {
            let target = self.zoom_target.take().unwrap_or(ZoomTarget::Origin);
            self.emit_event(SceneEvent::new(
                SceneEvent::ZOOM_FINISHED,
                target.wire_index(),
                sample.id.0 as f32,
                0.0,
            ));
            log::info!("zoom {} to {:?} finished", sample.id.0, target);
        }
    }
}
