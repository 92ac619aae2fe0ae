//! Application configuration
//!
//! Configuration is loaded with the `config` crate from defaults, optional
//! files, and `BARBEARIA__`-prefixed environment variables. There is no
//! global cache: callers hold a [`SharedConfig`] and refresh it explicitly.

use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use parking_lot::RwLock;
use serde::Deserialize;
use std::env;
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::AppResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shop settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShopConfig {
    /// Display name
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// IANA time zone used for calendar-month boundaries
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_shop_name() -> String {
    "Barbearia".to_string()
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

impl ShopConfig {
    /// Parse the configured time zone
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Config(format!("Invalid time zone {}: {}", self.timezone, e)))
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            timezone: default_timezone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for this workspace's crates when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config files
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .set_default("shop.name", default_shop_name())?
            .set_default("shop.timezone", default_timezone())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("BARBEARIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Injected configuration handle
///
/// Loaded once, read many times, replaced only through [`SharedConfig::refresh`]
/// or [`SharedConfig::replace`].
#[derive(Debug, Clone)]
pub struct SharedConfig {
    inner: Arc<RwLock<AppConfig>>,
}

impl SharedConfig {
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Load from the environment
    pub fn load() -> AppResult<Self> {
        Ok(Self::new(AppConfig::load()?))
    }

    /// Snapshot of the current configuration
    pub fn current(&self) -> AppConfig {
        self.inner.read().clone()
    }

    /// Shop time zone from the current configuration
    pub fn timezone(&self) -> AppResult<Tz> {
        self.inner.read().shop.tz()
    }

    /// Reload from the environment, keeping the old value on failure
    pub fn refresh(&self) -> AppResult<()> {
        let fresh = AppConfig::load()?;
        self.replace(fresh);
        info!("Configuration refreshed");
        Ok(())
    }

    /// Swap in a new configuration
    pub fn replace(&self, config: AppConfig) {
        *self.inner.write() = config;
    }
}
