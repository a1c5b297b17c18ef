//! Capsule AI - landing site
//!
//! The marketing page for the Capsule AI image generation platform, built with
//! Leptos and WebAssembly. Page state and timing rules live in [`core`]; the
//! components and browser glue live in [`ui`].

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    crate::ui::dom::install_error_handlers();
    crate::ui::namespace::install();
    leptos::mount::hydrate_body(App);
}
