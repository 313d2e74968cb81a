//! Runtime validation of loaded configuration.

use crate::schema::Config;
use port_common::PortError;
use std::collections::HashSet;
use unic_langid::LanguageIdentifier;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// Every locale must be a valid language identifier, and the supported
    /// locales must be non-empty and free of duplicates. The default locale
    /// does not have to be among the supported locales.
    pub fn validate(config: &Config) -> Result<(), PortError> {
        validate_locale("default_locale", &config.i18n.default_locale)?;

        if config.i18n.supported_locales.is_empty() {
            return Err(PortError::Config(
                "supported_locales cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for locale in &config.i18n.supported_locales {
            validate_locale("supported_locales", locale)?;
            if !seen.insert(locale.as_str()) {
                return Err(PortError::Config(format!(
                    "supported_locales lists {locale:?} more than once"
                )));
            }
        }

        Ok(())
    }
}

fn validate_locale(field: &str, locale: &str) -> Result<(), PortError> {
    if locale.is_empty() || locale.parse::<LanguageIdentifier>().is_err() {
        return Err(PortError::Config(format!(
            "{field}: {locale:?} is not a valid locale identifier"
        )));
    }
    Ok(())
}
