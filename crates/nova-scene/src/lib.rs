pub mod animation;
pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod shading;
pub mod systems;

// Re-export key types at crate root for convenience
pub use animation::{CameraAnimator, CameraSample, Easing, ZoomId};
pub use api::config::SceneConfig;
pub use api::scene::{SceneContext, Showcase, ZoomTarget};
pub use api::types::{HoverInfo, PlanetId, SceneEvent};
pub use bridge::protocol::{pack_frame, ProtocolLayout};
pub use components::geometry::{SphereGeometry, SphereVertex};
pub use components::planet::Planet;
pub use core::planets::PlanetSet;
pub use core::time::{FixedTimestep, FrameClock};
pub use error::ConfigurationError;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{PlanetInstance, RenderBuffer};
pub use shading::{shade_fragment, spherical_uv, style_color, PlanetStyle, PLANET_SHADER_WGSL};
pub use systems::render::build_render_buffer;
pub use systems::starfield::{Starfield, StarfieldConfig};
pub use systems::tint::BackgroundTint;
