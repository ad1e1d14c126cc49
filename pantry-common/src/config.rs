//! Configuration loading for the Pantry client
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: a warning is logged and defaults
//! apply. A TOML file that exists but cannot be parsed is a configuration
//! error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Recipe generation endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://plp-backend-production-ff60.up.railway.app/generate";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV_VAR: &str = "PANTRY_ENDPOINT";

/// Environment variable pointing at a TOML config file
pub const CONFIG_ENV_VAR: &str = "PANTRY_CONFIG";

/// Catalog shown when the config file does not define one
pub const DEFAULT_CATALOG: &[&str] = &[
    "chicken", "beef", "rice", "pasta", "tomato", "onion", "garlic", "potato", "carrot",
    "cheese", "egg", "milk", "butter", "flour", "bread", "spinach", "mushroom", "pepper",
];

/// Configuration file contents
///
/// Every field is optional so that a partial file only overrides what it
/// names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Recipe generation endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Ingredient catalog identifiers, in display order
    #[serde(default)]
    pub catalog: Option<Vec<String>>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        info!("Loading config file {}", path.display());
        Self::load(path)
    }
}

/// Platform config file location: `<config_dir>/pantry/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pantry").join("config.toml"))
}

/// Values supplied on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub config_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub catalog: Vec<String>,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            catalog: DEFAULT_CATALOG.iter().map(|s| s.to_string()).collect(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from overrides, environment, TOML and defaults
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let toml_config = match resolve_config_path(overrides.config_path) {
            Some(path) => TomlConfig::load_or_default(&path)?,
            None => {
                warn!("Could not determine config directory, using built-in defaults");
                TomlConfig::default()
            }
        };

        Self::merge(overrides.endpoint, overrides.log_level, toml_config)
    }

    fn merge(
        cli_endpoint: Option<String>,
        cli_log_level: Option<String>,
        toml_config: TomlConfig,
    ) -> Result<Self> {
        let defaults = Self::default();

        // Priority 1 → 4: CLI, environment, TOML, compiled default
        let endpoint = cli_endpoint
            .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
            .or(toml_config.endpoint)
            .unwrap_or(defaults.endpoint);

        let endpoint = endpoint.trim().to_string();
        if endpoint.is_empty() {
            return Err(Error::Config("Endpoint URL must not be empty".to_string()));
        }

        let catalog = toml_config
            .catalog
            .map(|items| {
                items
                    .into_iter()
                    .map(|item| item.trim().to_lowercase())
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.catalog);

        let log_level = cli_log_level.unwrap_or(toml_config.logging.level);

        debug!(endpoint = %endpoint, catalog_size = catalog.len(), "Configuration resolved");

        Ok(Self {
            endpoint,
            catalog,
            log_level,
        })
    }
}

fn resolve_config_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    cli_path
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
        .or_else(default_config_path)
}
