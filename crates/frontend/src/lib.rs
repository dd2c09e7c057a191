#![recursion_limit = "256"]

pub mod app;
pub mod layout;

pub use contracts::layout::{
    ConfigError, DrawerConfig, HeaderConfig, HeaderRowConfig, LayoutConfig, NavConfig,
    NavLinkConfig, PaneConfig, TabsConfig, TitleConfig, LARGE_SCREEN_ONLY, SMALL_SCREEN_ONLY,
};
pub use layout::coordinator::{PaneCoordinator, PaneListener, PaneRequester, PaneSwitch};
pub use layout::{Layout, LayoutModel, PaneContentFn};

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
