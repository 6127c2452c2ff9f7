//! Configuration
//!
//! The only setting is where the food API lives.

use thiserror::Error;

/// Environment variable holding the API base URL
pub const API_BASE_URL_ENV: &str = "MENU_API_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// API base URL baked in at build time. Browsers have no process
/// environment, so the WASM build reads the variable when it is compiled.
const COMPILED_API_BASE_URL: Option<&str> = option_env!("MENU_API_BASE_URL");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
}

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`
    pub api_base_url: String,
}

impl MenuConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = api_base_url.into();
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        Ok(Self {
            api_base_url: url.to_string(),
        })
    }

    /// Load from the runtime environment, then the build environment, then the default
    pub fn load() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_BASE_URL_ENV).ok();
        Self::from_sources(runtime, COMPILED_API_BASE_URL)
    }

    fn from_sources(runtime: Option<String>, compiled: Option<&str>) -> Result<Self, ConfigError> {
        let url = runtime
            .or_else(|| compiled.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::new(url)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
