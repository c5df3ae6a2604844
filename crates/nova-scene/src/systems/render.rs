use crate::api::scene::SceneContext;
use crate::renderer::instance::{PlanetInstance, RenderBuffer};

/// Build the render buffer from the scene: one instance per planet in spawn
/// order, then every star as an xyz triple.
pub fn build_render_buffer(ctx: &SceneContext, buffer: &mut RenderBuffer) {
    buffer.clear();

    let tint = ctx.tint.current().to_array();
    for planet in ctx.planets.iter() {
        buffer.push(PlanetInstance {
            position: planet.position.to_array(),
            radius: planet.radius,
            rotation: planet.rotation.to_array(),
            style: planet.style.index() as f32,
            tint,
            _pad: 0.0,
        });
    }

    buffer.stars.reserve(ctx.starfield.len() * 3);
    for star in ctx.starfield.stars() {
        buffer.stars.extend_from_slice(&star.to_array());
    }
}
