//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for port-copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localization configuration.
    pub i18n: I18nConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when the requested locale has no copy.
    pub default_locale: String,
    /// Locales the copy is expected to be available in, in authoring order.
    pub supported_locales: Vec<String>,
    /// Optional copy catalog: a YAML/JSON file or a directory of Fluent files.
    pub catalog_path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    pub filter: String,
    /// Whether to emit JSON log lines instead of human-readable ones.
    pub json: bool,
}
