//! User settings stored as settings.json in the app data directory

use crate::constants::SCRIPT_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Form endpoint, overrides the built-in script URL
    pub endpoint: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Endpoint the form posts to. An override that does not parse is ignored.
    pub fn endpoint_or_default(&self) -> Result<Url, url::ParseError> {
        if let Some(raw) = self.endpoint.as_deref() {
            match Url::parse(raw) {
                Ok(url) => {
                    debug!("Using endpoint override from settings");
                    return Ok(url);
                }
                Err(e) => warn!(error = %e, "Invalid endpoint override, using default"),
            }
        }
        Url::parse(SCRIPT_URL)
    }
}
