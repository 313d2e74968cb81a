//! Error types for internationalization operations

use port_common::PortError;
use thiserror::Error;

/// Errors that can occur while authoring or loading copy.
///
/// Resolving copy never fails; these only come out of locale parsing and
/// catalog loading.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid locale identifier: {0:?}")]
    InvalidLocale(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoad { path: String },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource {path}: {errors:?}")]
    FluentParse { path: String, errors: Vec<String> },

    /// A Fluent message uses a placeable that plain copy cannot carry
    #[error("Message '{id}' for locale {locale} uses an unsupported placeable")]
    UnsupportedPlaceable { id: String, locale: String },

    /// A catalog file could not be decoded
    #[error("Invalid copy catalog: {0}")]
    CatalogFormat(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for PortError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::Io(io) => Self::Io(io),
            other => Self::I18n(other.to_string()),
        }
    }
}
