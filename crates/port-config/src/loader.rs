//! Configuration loading from files and the environment.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use port_common::{PortError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the default locale.
pub const ENV_DEFAULT_LOCALE: &str = "PORT_DEFAULT_LOCALE";
/// Environment variable overriding the supported locales (comma separated).
pub const ENV_SUPPORTED_LOCALES: &str = "PORT_SUPPORTED_LOCALES";
/// Environment variable overriding the catalog path.
pub const ENV_CATALOG_PATH: &str = "PORT_CATALOG_PATH";
/// Environment variable switching JSON logging on or off.
pub const ENV_LOG_JSON: &str = "PORT_LOG_JSON";

/// Configuration file formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parses configuration text in this format.
    pub fn parse(self, content: &str) -> std::result::Result<Config, PortError> {
        match self {
            Self::Yaml => {
                serde_yaml::from_str(content).map_err(|e| PortError::Serialization(e.to_string()))
            }
            Self::Toml => toml::from_str(content).map_err(|e| PortError::Serialization(e.to_string())),
            Self::Json => {
                serde_json::from_str(content).map_err(|e| PortError::Serialization(e.to_string()))
            }
        }
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader that only uses defaults and the environment.
    pub const fn defaults_only() -> Self {
        Self { path: None }
    }

    /// Gets the configured path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads configuration from file, applies environment overrides, and validates it.
    pub fn load(&self) -> Result<Config> {
        let mut config = self.load_file()?;
        apply_overrides(&mut config, |key| env::var(key).ok())?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Loads configuration from file only. A missing file yields the defaults.
    pub fn load_file(&self) -> Result<Config> {
        let Some(path) = &self.path else {
            debug!("No configuration file given, using defaults");
            return Ok(Config::default());
        };

        if !path.exists() {
            info!("Configuration file {:?} not found, using defaults", path);
            return Ok(Config::default());
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            PortError::Config(format!("unsupported configuration file: {}", path.display()))
        })?;

        let content = fs::read_to_string(path)?;
        let config = format.parse(&content)?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

/// Applies overrides read through `lookup` on top of `config`.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> std::result::Result<(), PortError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(locale) = lookup(ENV_DEFAULT_LOCALE) {
        debug!("Overriding default locale from environment: {}", locale);
        config.i18n.default_locale = locale.trim().to_string();
    }

    if let Some(locales) = lookup(ENV_SUPPORTED_LOCALES) {
        config.i18n.supported_locales = locales
            .split(',')
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    if let Some(path) = lookup(ENV_CATALOG_PATH) {
        config.i18n.catalog_path = Some(PathBuf::from(path));
    }

    if let Some(json) = lookup(ENV_LOG_JSON) {
        config.logging.json = match json.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            other => {
                return Err(PortError::Config(format!(
                    "{ENV_LOG_JSON} must be a boolean, got {other:?}"
                )))
            }
        };
    }

    Ok(())
}
