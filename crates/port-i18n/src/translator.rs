//! Resolution of translatable copy to a single display string

use crate::bundle::TextBundle;
use crate::locale::Locale;
use crate::translatable::Translatable;
use port_common::escape_html;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Locale consulted when the requested locale has no text
pub const DEFAULT_LOCALE: &str = "nl";

/// Placeholder shown when a bundle has no text at all
pub const MISSING_TEXT: &str = "?text?";

/// Which step of the fallback chain produced a resolved text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// The requested locale had text
    Requested,
    /// The default locale had text
    DefaultLocale,
    /// The first-inserted entry with text was used
    FirstAvailable,
    /// Nothing had text; the placeholder was used
    Missing,
}

/// The outcome of resolving a bundle for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// The unescaped text
    pub text: &'a str,
    /// The locale the text came from, if any
    pub locale: Option<&'a str>,
    /// The fallback step that produced the text
    pub fallback: Fallback,
}

/// Returns true only for values that carry translations
pub fn is_translatable(value: &Translatable<'_>) -> bool {
    value.is_translatable()
}

/// Resolves translatable copy for a requested locale.
///
/// The translator holds no state beyond its default locale, so a single
/// instance can be shared across threads and render calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    default_locale: String,
}

impl Translator {
    /// Create a translator with the given default locale
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    /// Create a translator from a validated locale
    pub fn with_locale(default_locale: &Locale) -> Self {
        Self::new(default_locale.as_str())
    }

    /// Get the default locale
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Translate a value into HTML-safe text.
    ///
    /// Bundles are resolved and escaped. Any other value is returned as is,
    /// without escaping.
    pub fn translate<'a>(&self, value: impl Into<Translatable<'a>>, locale: &str) -> String {
        match value.into() {
            Translatable::Bundle(bundle) => escape_html(self.resolve(bundle, locale)),
            Translatable::Plain(text) => text.into_owned(),
        }
    }

    /// Resolve the unescaped text of a bundle for a locale.
    ///
    /// Tries the requested locale, then the default locale, then the
    /// first-inserted entry with text, then falls back to [`MISSING_TEXT`].
    pub fn resolve<'b>(&self, bundle: &'b TextBundle, locale: &str) -> &'b str {
        self.resolve_detailed(bundle, locale).text
    }

    /// Like [`Translator::resolve`], but also reports where the text came from
    pub fn resolve_detailed<'b>(&self, bundle: &'b TextBundle, locale: &str) -> Resolution<'b> {
        if let Some((found, text)) = bundle
            .translations()
            .find(|(candidate, _)| *candidate == locale)
            .and_then(|(found, text)| text.map(|text| (found, text)))
        {
            trace!("Resolved copy for requested locale {}", locale);
            return Resolution {
                text,
                locale: Some(found),
                fallback: Fallback::Requested,
            };
        }

        if let Some((found, text)) = bundle
            .translations()
            .find(|(candidate, _)| *candidate == self.default_locale)
            .and_then(|(found, text)| text.map(|text| (found, text)))
        {
            debug!(
                "No copy for locale {:?}, falling back to default locale {}",
                locale, self.default_locale
            );
            return Resolution {
                text,
                locale: Some(found),
                fallback: Fallback::DefaultLocale,
            };
        }

        if let Some((found, text)) = bundle.first_available() {
            debug!(
                "No copy for locale {:?} or default locale {}, using first available locale {}",
                locale, self.default_locale, found
            );
            return Resolution {
                text,
                locale: Some(found),
                fallback: Fallback::FirstAvailable,
            };
        }

        warn!("No copy available for locale {:?}, showing placeholder", locale);
        Resolution {
            text: MISSING_TEXT,
            locale: None,
            fallback: Fallback::Missing,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}
