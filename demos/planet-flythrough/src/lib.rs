use wasm_bindgen::prelude::*;

mod planets;
mod showcase;
use showcase::Flythrough;

nova_web::export_scene!(Flythrough, "planet-flythrough");
