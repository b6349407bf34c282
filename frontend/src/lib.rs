use log::info;
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod config;
pub mod context;
pub mod version;

pub use bindings::GlobalRef;
pub use config::Config;
pub use context::{use_app_config, ConfigProvider};

// Set up logging and panic reporting when the module is loaded
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("{} loaded", version::Version::full());
    Ok(())
}
