//! Planet fly-through: six shaded planets drifting toward a slowly
//! advancing camera, with hover-to-zoom.

use nova_scene::{InputEvent, InputQueue, SceneConfig, SceneContext, Showcase};

use crate::planets::planet_table;

// ── Custom event kinds from the page ─────────────────────────────────

/// `a` = zoom duration in milliseconds.
const CUSTOM_SET_ZOOM_DURATION: u32 = 1;
/// `a` = 0 for the front approach, anything else for the side approach.
const CUSTOM_SET_APPROACH: u32 = 2;

pub struct Flythrough;

impl Flythrough {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Flythrough {
    fn default() -> Self {
        Self::new()
    }
}

impl Showcase for Flythrough {
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        for desc in planet_table() {
            let planet = ctx
                .new_planet()
                .with_tag(desc.name)
                .with_style(desc.style)
                .with_position(desc.position)
                .with_radius(desc.radius)
                .with_spin(desc.spin)
                .with_drift(desc.drift);
            ctx.planets.spawn(planet);
        }
        log::info!("spawned {} planets", ctx.planets.len());
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        for event in input.iter() {
            let &InputEvent::Custom { kind, a, .. } = event else {
                continue;
            };
            match kind {
                CUSTOM_SET_ZOOM_DURATION if a > 0.0 => {
                    ctx.animator.set_duration_ms(a as f64);
                }
                CUSTOM_SET_APPROACH => {
                    let preset = if a == 0.0 {
                        SceneConfig::default()
                    } else {
                        SceneConfig::side_approach()
                    };
                    ctx.config.zoom_offset = preset.zoom_offset;
                }
                _ => log::debug!("unhandled custom event {}", kind),
            }
        }
    }
}
