//! Browser widgets for the storefront theme.
//!
//! Nothing starts on load: the page bootstrap constructs what it needs,
//! e.g. `new DispatchTimer(opts).start()`, `initBrandNavigation()` and
//! `initFooterAccordion()`.

pub mod components;
pub mod config;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub use components::{
    brand_navigation::init_brand_navigation, dispatch_timer::DispatchTimer,
    footer_accordion::init_footer_accordion,
};

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Storefront logger was already installed".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Storefront widgets loaded");
}
