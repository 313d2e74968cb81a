//! Common type definitions shared between the copy layer and its hosts.

use serde::{Deserialize, Serialize};

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum PortError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Localization error.
    #[error("Localization error: {0}")]
    I18n(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Payload handed back to the command bus when a page resolves.
///
/// The wire form carries the variant name in a `__type__` field, so
/// `Payload::Void` serializes as `{"__type__":"PayloadVoid"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__type__")]
pub enum Payload {
    /// The page finished without producing data.
    #[serde(rename = "PayloadVoid")]
    Void,
}

impl Payload {
    /// Returns the `__type__` tag of this payload.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Void => "PayloadVoid",
        }
    }
}
