//! Tracing subscriber setup.

use crate::error::{CliError, CliResult};
use port_config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Logs go to stderr so stdout only carries copy.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &LoggingConfig) -> CliResult<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref(), config)?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| CliError::Logging(e.to_string()))
}

/// Builds the event filter from a `RUST_LOG` value, falling back to the
/// configured filter when it is unset or invalid.
pub fn env_filter(rust_log: Option<&str>, config: &LoggingConfig) -> CliResult<EnvFilter> {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(|| EnvFilter::try_new(&config.filter), Ok)
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn check(filter: EnvFilter, probe: impl FnOnce() -> bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, probe)
    }

    #[test]
    fn test_default_filter_shows_library_warnings() {
        let filter = || env_filter(None, &LoggingConfig::default()).unwrap();

        assert!(check(filter(), || tracing::enabled!(
            target: "port_i18n::translator",
            Level::WARN
        )));
        assert!(check(filter(), || tracing::enabled!(
            target: "port_config::loader",
            Level::INFO
        )));
        assert!(!check(filter(), || tracing::enabled!(
            target: "port_i18n::translator",
            Level::DEBUG
        )));
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = env_filter(Some("port_i18n=error"), &LoggingConfig::default()).unwrap();
        assert!(!check(filter, || tracing::enabled!(
            target: "port_i18n::catalog",
            Level::WARN
        )));
    }

    #[test]
    fn test_invalid_configured_filter_is_an_error() {
        let config = LoggingConfig {
            filter: "port_i18n=loud".to_string(),
            json: false,
        };
        assert!(matches!(env_filter(None, &config), Err(CliError::Logging(_))));
    }
}
