//! Test utilities and shared test helpers for port-copy.
//!
//! This module provides logging setup, copy fixtures, and proptest strategies
//! that can be used across all crates in the workspace.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Copy fixtures shared by the i18n and page tests.
pub mod copy_fixtures {
    /// The end page title in both shipped locales, English first.
    pub fn thank_you() -> Vec<(&'static str, &'static str)> {
        vec![("en", "Thank you"), ("nl", "Bedankt")]
    }

    /// Copy that contains raw markup.
    pub fn markup() -> Vec<(&'static str, &'static str)> {
        vec![("en", "<b>Hi</b>")]
    }

    /// A YAML copy catalog with a null entry and a non-default-locale-only entry.
    pub fn catalog_yaml() -> &'static str {
        r#"
title:
  en: "Thank you"
  nl: "Bedankt"
greeting:
  en: "Hi"
pending:
  de: ~
  fr: "Bientôt"
  en: "Soon"
empty: {}
"#
    }

    /// Fluent sources for an English and Dutch catalog directory.
    pub fn catalog_ftl() -> [(&'static str, &'static str); 2] {
        [
            (
                "en",
                "title = Welcome\ncontinue-button = Start\nprivacy-label = I have read and agree with the above terms.\n",
            ),
            ("nl", "title = Welkom\ncontinue-button = Start\n"),
        ]
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating short lowercase locale codes.
    pub fn locale_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2}"
    }

    /// Strategy for generating copy that may contain markup characters.
    pub fn copy_text_strategy() -> impl Strategy<Value = String> {
        r#"[a-zA-Z0-9 <>&"'/]{0,40}"#
    }

    /// Strategy for generating ordered `(locale, text)` entries.
    pub fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((locale_strategy(), copy_text_strategy()), 0..max)
    }
}
