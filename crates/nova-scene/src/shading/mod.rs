//! Procedural planet surface shading.

pub mod fragment;
pub mod noise;
pub mod program;
pub mod spherical;
pub mod style;

pub use fragment::{lambert, shade_fragment, Fragment};
pub use noise::{fbm, hash, periodic_noise};
pub use program::{PlanetUniform, UniformSlot, PLANET_SHADER_WGSL, UNIFORM_SLOTS};
pub use spherical::spherical_uv;
pub use style::{style_color, PlanetStyle};
