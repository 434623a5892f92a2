use std::fs;
use std::path::Path;
use std::time::Duration;

use list_logging::list_warn;
use serde::{Deserialize, Serialize};

/// Runtime configuration, read from a RON file. Any missing field falls
/// back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub quiet_interval_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/v1/flows".to_string(),
            quiet_interval_ms: 300,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl AppConfig {
    pub fn quiet_interval(&self) -> Duration {
        Duration::from_millis(self.quiet_interval_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Loads the config file. A missing file is normal and yields defaults;
/// unreadable or malformed files are logged and also yield defaults.
pub fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            list_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            list_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
