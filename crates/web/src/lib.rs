//! `viewsmith-web` — browser shell for prompt-driven view generation.
//!
//! A single-page Leptos (CSR) app: it keeps a stable session identity in
//! local storage, resolves that identity to a generated view through the
//! view registry, and submits generation requests assembled in the settings
//! drawer. The fallback view and the shell talk through a typed UI bus, not
//! a global DOM event.

pub mod api;
pub mod app;
pub mod bus;
pub mod fallback;
pub mod registry;
pub mod settings;

/// WASM entry point; runs automatically when the module loads.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::Shell);
}
