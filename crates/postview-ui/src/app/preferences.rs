//! Browser storage overrides for the app shell.

use crate::core::config::UiConfig;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const API_URL_KEY: &str = "postview.api_url";
pub(crate) const STARTUP_DELAY_KEY: &str = "postview.startup_delay_ms";

/// Resolve the UI configuration from `localStorage` overrides.
pub(crate) fn load_config() -> UiConfig {
    let api_url = read_raw(API_URL_KEY);
    let startup_delay = read_raw(STARTUP_DELAY_KEY);
    UiConfig::from_overrides(api_url.as_deref(), startup_delay.as_deref())
}

/// Read a plain string entry; values are stored unencoded so they can be set by hand.
fn read_raw(key: &str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(err) => {
            console::warn!(format!("failed to read {key} from storage"), err);
            None
        }
    }
}
