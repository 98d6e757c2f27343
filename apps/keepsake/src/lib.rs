use wasm_bindgen::prelude::*;

pub mod content;
pub mod scenes;

mod app;
pub use app::Keepsake;

journey_web::export_experience!(Keepsake, "keepsake");

// ---- Content exports for the page renderer ----

#[wasm_bindgen]
pub fn get_letter_segments() -> String {
    scenes::letter::segments_json()
}

#[wasm_bindgen]
pub fn get_memories() -> String {
    content::memories_json()
}

#[wasm_bindgen]
pub fn get_asset_catalog() -> String {
    content::asset_catalog().to_json()
}
