//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "enerji-master";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join(APP_DIR_NAME);

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "tr", "en"
    #[serde(default = "default_language")]
    pub language: String,
    /// Theme: "light", "dark"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_language() -> String { "tr".to_string() }
fn default_theme() -> String { "light".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: default_theme(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol shown after amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Electricity price per kWh
    #[serde(default = "default_unit_price")]
    pub unit_price: f64,
}

fn default_currency() -> String { "TRY".to_string() }
fn default_currency_symbol() -> String { "TL".to_string() }
fn default_unit_price() -> f64 { crate::pricing::DEFAULT_UNIT_PRICE }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            unit_price: default_unit_price(),
        }
    }
}

/// Device list storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite file path (None = platform data directory)
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Key the serialized device list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String { "energyDevices".to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            storage_key: default_storage_key(),
        }
    }
}
