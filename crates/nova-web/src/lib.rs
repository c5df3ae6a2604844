pub mod hover;
pub mod runner;

pub use runner::SceneRunner;

pub use js_sys;
pub use wasm_bindgen;

use nova_scene::ConfigurationError;
use wasm_bindgen::JsValue;

/// Log a configuration failure and hand it to the host as a string error.
pub fn to_js_error(err: ConfigurationError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// Generate all `#[wasm_bindgen]` exports for a showcase.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_frame, input hooks, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use nova_scene::*;
///
/// mod showcase;
/// use showcase::MyShowcase;
///
/// nova_web::export_scene!(MyShowcase, "my-showcase");
/// ```
///
/// The showcase type needs a `new()` constructor. The calling crate depends on
/// `wasm-bindgen`, `log`, `console_log` and `console_error_panic_hook`.
#[macro_export]
macro_rules! export_scene {
    ($showcase_type:ty, $showcase_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$showcase_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$showcase_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::error!("{}: not initialized, call scene_init() first", $showcase_name);
                        None
                    }
                }
            })
        }

        fn install_runner(runner: $crate::SceneRunner<$showcase_type>) {
            let mut runner = runner;
            runner.init();
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $showcase_name);
        }

        #[wasm_bindgen]
        pub fn scene_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::SceneRunner::new(<$showcase_type>::new()).map_err($crate::to_js_error)?;
            install_runner(runner);
            Ok(())
        }

        /// Like `scene_init`, with a JSON config overriding the showcase defaults.
        #[wasm_bindgen]
        pub fn scene_init_with_config(json: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let config = nova_scene::SceneConfig::from_json(json).map_err($crate::to_js_error)?;
            let runner = $crate::SceneRunner::with_config(<$showcase_type>::new(), config)
                .map_err($crate::to_js_error)?;
            install_runner(runner);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn scene_frame(now_ms: f64) {
            with_runner(|r| r.frame(now_ms));
        }

        // ---- Input hooks ----

        #[wasm_bindgen]
        pub fn scene_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(nova_scene::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_hover_enter(zone: u32, description: String, color: String) {
            with_runner(|r| {
                r.push_input(nova_scene::InputEvent::HoverEnter { zone: zone as usize, description, color })
            });
        }

        /// Hover-enter using the attributes bound by `scene_bind_hover_targets`.
        #[wasm_bindgen]
        pub fn scene_hover_zone(zone: u32) -> bool {
            with_runner(|r| r.hover_zone(zone as usize)).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn scene_hover_leave() {
            with_runner(|r| r.push_input(nova_scene::InputEvent::HoverLeave));
        }

        /// `zone < 0` means the click hit no planet.
        #[wasm_bindgen]
        pub fn scene_click(zone: i32) {
            let zone = usize::try_from(zone).ok();
            with_runner(|r| r.push_input(nova_scene::InputEvent::Click { zone }));
        }

        #[wasm_bindgen]
        pub fn scene_zoom_to(index: u32) {
            with_runner(|r| r.push_input(nova_scene::InputEvent::ZoomTo { index: index as usize }));
        }

        #[wasm_bindgen]
        pub fn scene_zoom_origin() {
            with_runner(|r| r.push_input(nova_scene::InputEvent::ZoomOrigin));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(nova_scene::InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn scene_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(nova_scene::InputEvent::Custom { kind, a, b, c }));
        }

        /// Read `#planet-0..` from the page. Returns the number of bound targets.
        #[wasm_bindgen]
        pub fn scene_bind_hover_targets() -> Result<u32, JsValue> {
            let count = with_runner(|r| r.context().planets.len()).unwrap_or(0);
            let targets = $crate::hover::bind_document_targets(count).map_err($crate::to_js_error)?;
            let bound = targets.len() as u32;
            with_runner(|r| r.set_hover_targets(targets));
            Ok(bound)
        }

        #[wasm_bindgen]
        pub fn get_hover_target_ids() -> $crate::js_sys::Array {
            let count = with_runner(|r| r.context().planets.len()).unwrap_or(0);
            (0..count)
                .map(|zone| JsValue::from_str(&$crate::hover::hover_target_id(zone)))
                .collect()
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_planets_ptr() -> *const f32 {
            with_runner(|r| r.planets_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_planet_count() -> u32 {
            with_runner(|r| r.planet_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_scene_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_scene_events_len() -> u32 {
            with_runner(|r| r.events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sphere_vertices_ptr() -> *const f32 {
            with_runner(|r| r.sphere_vertices_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sphere_vertex_count() -> u32 {
            with_runner(|r| r.sphere_vertex_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_sphere_indices_ptr() -> *const u32 {
            with_runner(|r| r.sphere_indices_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sphere_index_count() -> u32 {
            with_runner(|r| r.sphere_index_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_hover_description() -> String {
            with_runner(|r| r.hover_description()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_shader_source() -> String {
            nova_scene::PLANET_SHADER_WGSL.to_owned()
        }

        #[wasm_bindgen]
        pub fn get_is_animating() -> bool {
            with_runner(|r| r.is_animating()).unwrap_or(false)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_planets() -> u32 {
            with_runner(|r| r.max_planets()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };
}
