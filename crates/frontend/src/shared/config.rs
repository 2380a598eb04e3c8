//! Frontend configuration.
//!
//! The defaults are embedded as TOML; the API base URL can be overridden at
//! build time with the `TEA_API_BASE` environment variable.

use crate::shared::api_utils::api_base_from_location;
use leptos::prelude::use_context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API base URL. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MapConfig {
    /// Center of the overview map when no warehouse is focused
    pub default_lat: f64,
    pub default_lon: f64,
    pub default_zoom: u8,
    /// Zoom used when a single warehouse marker is shown
    pub marker_zoom: u8,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[map]
default_lat = 10.762622
default_lon = 106.660172
default_zoom = 10
marker_zoom = 15
"#;

/// Build-time override of the API base URL
const API_BASE_OVERRIDE: Option<&str> = option_env!("TEA_API_BASE");

/// Load the embedded configuration and apply the build-time override
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_override(API_BASE_OVERRIDE);
    Ok(config)
}

impl AppConfig {
    /// Values used if the embedded TOML ever fails to parse
    pub fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
            },
            map: MapConfig {
                default_lat: 10.762622,
                default_lon: 106.660172,
                default_zoom: 10,
                marker_zoom: 15,
            },
        }
    }

    fn apply_override(&mut self, base_url: Option<&str>) {
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            self.api.base_url = base.trim_end_matches('/').to_string();
        }
    }

    /// API base URL, e.g. "http://localhost:3000"
    pub fn api_base(&self) -> String {
        if self.api.base_url.is_empty() {
            api_base_from_location(self.api.port)
        } else {
            self.api.base_url.clone()
        }
    }
}

/// Configuration provided by `App`; built-in values outside of it
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(|| {
        log::warn!("AppConfig not found in context, using built-in values");
        AppConfig::fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.map.marker_zoom, 15);
    }

    #[test]
    fn test_fallback_matches_embedded_defaults() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let mut config = AppConfig::fallback();
        config.apply_override(Some("https://api.example.com/"));
        assert_eq!(config.api_base(), "https://api.example.com");

        let mut config = AppConfig::fallback();
        config.apply_override(Some("   "));
        assert_eq!(config.api.base_url, "");
    }
}
