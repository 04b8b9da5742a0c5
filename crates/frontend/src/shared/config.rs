//! Application configuration.
//!
//! The embedded default is always valid. A TOML override can be dropped into
//! local storage under [`CONFIG_OVERRIDE_KEY`] (handy for pointing a deployed
//! bundle at a staging API); a broken override is logged and ignored.

use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::storage::KeyValueStorage;

pub const CONFIG_OVERRIDE_KEY: &str = "app-config";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[query]
stale_time_secs = 60
gc_time_secs = 300
retry = 3
retry_base_delay_ms = 1000
retry_max_delay_ms = 30000

[filters]
default_company = "BIS"
max_selected_months = 6
default_page_size = 10
page_size_options = [10, 20, 50, 100]
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute API root. Empty means "same host as the page, on `port`".
    pub base_url: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub stale_time_secs: u64,
    pub gc_time_secs: u64,
    pub retry: u32,
    pub retry_base_delay_ms: u32,
    pub retry_max_delay_ms: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: 60,
            gc_time_secs: 300,
            retry: 3,
            retry_base_delay_ms: 1000,
            retry_max_delay_ms: 30_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub default_company: String,
    pub max_selected_months: usize,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_company: "BIS".to_string(),
            max_selected_months: 6,
            default_page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub query: QueryConfig,
    pub filters: FilterConfig,
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Storage override first, embedded default second, hard-coded defaults last.
pub fn load_config(storage: &dyn KeyValueStorage) -> AppConfig {
    if let Some(text) = storage.get_item(CONFIG_OVERRIDE_KEY) {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Using configuration override from local storage");
                return config;
            }
            Err(e) => log::warn!("Ignoring configuration override: {}", e),
        }
    }
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid: {}", e);
        AppConfig::default()
    })
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
