#![forbid(unsafe_code)]
//! Browser front end for the bookshelf page.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalogue;
pub mod components;
pub mod dom;
pub mod logging;
pub mod paths;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<app::App>::new().render();
}
