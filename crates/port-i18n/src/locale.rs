//! Locale identifiers

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A validated locale code such as `en` or `nl`.
///
/// Bundles are keyed by plain strings and resolution accepts any `&str`, so
/// this type is only needed where copy is authored or configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse a locale from a language code, normalizing it to its canonical form
    pub fn parse(code: &str) -> I18nResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(I18nError::InvalidLocale(code.to_string()));
        }

        let lang_id: LanguageIdentifier = code
            .parse()
            .map_err(|_| I18nError::InvalidLocale(code.to_string()))?;

        Ok(Self(lang_id.to_string()))
    }

    /// Dutch, the default locale of the port
    pub fn dutch() -> Self {
        Self("nl".to_string())
    }

    /// English
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Get the locale code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the primary language subtag, e.g. `en` for `en-GB`
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Convert to a unic-langid LanguageIdentifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.0
            .parse()
            .map_err(|_| I18nError::InvalidLocale(self.0.clone()))
    }

    /// Parse a list of locale codes, keeping their order
    pub fn parse_all<I, S>(codes: I) -> I18nResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().map(|code| Self::parse(code.as_ref())).collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::dutch()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_codes() {
        assert_eq!(Locale::parse("en").unwrap().as_str(), "en");
        assert_eq!(Locale::parse(" nl ").unwrap().as_str(), "nl");
    }

    #[test]
    fn test_parse_canonicalizes_region() {
        let locale = Locale::parse("en_us").unwrap();
        assert_eq!(locale.as_str(), "en-US");
        assert_eq!(locale.language(), "en");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(Locale::parse(""), Err(I18nError::InvalidLocale(_))));
        assert!(Locale::parse("not a locale").is_err());
        assert!(Locale::parse("123456789").is_err());
    }

    #[test]
    fn test_default_is_dutch() {
        assert_eq!(Locale::default(), Locale::dutch());
        assert_eq!(Locale::english().to_string(), "en");
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let locale: Locale = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(locale, Locale::dutch());
        assert!(serde_json::from_str::<Locale>("\"!!\"").is_err());
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let locales = Locale::parse_all(["nl", "en", "de"]).unwrap();
        let codes: Vec<&str> = locales.iter().map(Locale::as_str).collect();
        assert_eq!(codes, vec!["nl", "en", "de"]);
    }
}
