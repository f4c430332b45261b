use rocket::figment::Figment;
use serde::{Deserialize, Serialize};

use crate::nav::NavConfig;

/// Application settings, read from the `folio` table of `Rocket.toml`
/// (or `ROCKET_FOLIO={...}`). Every key has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// File path or http(s) URL of the portfolio JSON.
    pub data_source: String,
    /// Timeout for a remote data source.
    pub fetch_timeout_secs: u64,
    /// Height of the fixed navigation bar; scroll targets land this far below the top.
    pub header_offset: f64,
    /// Scroll offset past which the navigation bar switches to its solid style.
    pub scroll_threshold: f64,
    pub contact_max_attempts: u64,
    pub contact_window_secs: u64,
}

pub const DEFAULT_DATA_SOURCE: &str = "website/static/portfolio-data.json";

impl Default for FolioConfig {
    fn default() -> Self {
        FolioConfig {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            fetch_timeout_secs: 10,
            header_offset: 80.0,
            scroll_threshold: 10.0,
            contact_max_attempts: 5,
            contact_window_secs: 600,
        }
    }
}

impl FolioConfig {
    pub fn nav_config(&self) -> NavConfig {
        NavConfig {
            header_offset: self.header_offset,
            scroll_threshold: self.scroll_threshold,
            ..NavConfig::default()
        }
    }

    pub fn from_figment(figment: &Figment) -> Self {
        if !figment.contains("folio") {
            return FolioConfig::default();
        }
        match figment.extract_inner::<FolioConfig>("folio") {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid [folio] config, using defaults: {}", e);
                FolioConfig::default()
            }
        }
    }
}
