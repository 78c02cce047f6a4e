//! Ragnar DEX browser front-end
//!
//! Client-side rendered Leptos app. The WASM entry point mounts the app to
//! the document body and removes the static loading screen from index.html.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Ragnar DEX starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Remove the static loading screen once the WASM bundle has loaded.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::warn!("loading element not found");
        return;
    };

    if let Some(element) = loading.dyn_ref::<HtmlElement>() {
        element.class_list().add_1("hidden").ok();
    }
    loading
        .set_attribute("style", "display: none !important;")
        .ok();
}
