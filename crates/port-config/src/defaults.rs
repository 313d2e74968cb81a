//! Default configuration values.

use crate::schema::{Config, I18nConfig, LoggingConfig};

/// Default locale of the port.
pub const DEFAULT_LOCALE: &str = "nl";

/// Default log filter, naming every crate that emits events.
pub const DEFAULT_LOG_FILTER: &str = "port_cli=info,port_config=info,port_i18n=info,port_pages=info";

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            supported_locales: vec!["en".to_string(), "nl".to_string()],
            catalog_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}
