//! Application-wide error types using thiserror.

use port_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Copy loading error.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Logging setup error.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Some copy lacks text for a supported locale.
    #[error("{count} entries are missing copy for a supported locale")]
    IncompleteCopy {
        /// Number of incomplete entries.
        count: usize,
    },

    /// Output encoding error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
