//! Application configuration from file and environment variables
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (prefixed with SOAPBOX_)
//! 2. Config file (soapbox.toml)
//! 3. Default values

use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Global application configuration
pub static APP_CONFIG: Lazy<RwLock<AppConfig>> = Lazy::new(|| {
    RwLock::new(AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    }))
});

/// Markup rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Rewrite bare URLs in post bodies into anchors
    pub autolink: bool,
    /// Anchor target for auto-linked URLs
    pub link_target: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            autolink: true,
            link_target: "_blank".to_string(),
        }
    }
}

/// Content limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum post length in bytes; longer bodies still render, tooling
    /// warns
    pub max_post_length: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_post_length: 50000,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub markup: MarkupConfig,
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("soapbox.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&AppConfig::default())?)
            // Add config file (optional)
            .add_source(File::new(path, FileFormat::Toml).required(false))
            // Override with environment variables (SOAPBOX_ prefix)
            // e.g., SOAPBOX_MARKUP_AUTOLINK, SOAPBOX_LIMITS_MAX_POST_LENGTH
            .add_source(
                Environment::with_prefix("SOAPBOX")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reload configuration from file
    pub fn reload() -> Result<(), ConfigError> {
        let new_config = Self::load()?;
        if let Ok(mut config) = APP_CONFIG.write() {
            *config = new_config;
            log::info!("Configuration reloaded");
        }
        Ok(())
    }
}

/// Initialize application configuration
///
/// Triggers the lazy load and logs the result. Should be called early in
/// application startup.
pub fn init() {
    let config = get_config();
    log::info!(
        "Configuration loaded: markup.autolink = {}",
        config.markup.autolink
    );
}

/// Get the current application configuration
pub fn get_config() -> AppConfig {
    APP_CONFIG.read().map(|c| c.clone()).unwrap_or_default()
}

/// Get markup configuration
pub fn markup() -> MarkupConfig {
    get_config().markup
}

/// Get limits configuration
pub fn limits() -> LimitsConfig {
    get_config().limits
}
