use log::{debug, info, warn};
use shared::AppConfig;

pub struct Config;

impl Config {
    /// Builds the app configuration for the page currently loaded in the browser.
    pub fn from_window() -> AppConfig {
        let port = current_port();
        let config = Config::for_location_port(port);
        info!("Using {:?} navigation for this page", config.deployment());
        config
    }

    /// Same as [`Config::from_window`] for a port that was already read.
    ///
    /// Backend services stay on the deployed host whatever the port is; there
    /// is no local service mode yet, only local page navigation.
    pub fn for_location_port(port: Option<String>) -> AppConfig {
        AppConfig::for_port(port.as_deref())
    }
}

/// The port of `window.location`, or `None` outside a browser window or when
/// the page uses the scheme's default port.
pub fn current_port() -> Option<String> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            warn!("No window available, treating page port as absent");
            return None;
        }
    };

    match window.location().port() {
        Ok(port) if !port.is_empty() => {
            debug!("Page served on port {}", port);
            Some(port)
        }
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to read page port: {:?}", e);
            None
        }
    }
}
