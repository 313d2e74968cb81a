//! Localized copy resolution for the data donation port.
//!
//! This crate turns translatable copy into a single display string:
//!
//! - [`TextBundle`] holds the locale → text entries of one piece of copy
//! - [`Translator`] picks the entry for a locale, falling back to the
//!   configured default locale, then to the first entry that has text,
//!   and finally to the `?text?` placeholder
//! - [`CopyCatalog`] loads bundles from YAML, JSON, or Fluent files
//!
//! # Example
//!
//! ```rust
//! use port_i18n::{TextBundle, Translator};
//!
//! let title = TextBundle::new()
//!     .add("en", "Thank you")
//!     .add("nl", "Bedankt");
//!
//! let translator = Translator::new("nl");
//! assert_eq!(translator.translate(&title, "en"), "Thank you");
//! assert_eq!(translator.translate(&title, "fr"), "Bedankt");
//! ```

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod translatable;
pub mod translator;

pub use bundle::TextBundle;
pub use catalog::{CopyCatalog, MissingCopy};
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use translatable::Translatable;
pub use translator::{is_translatable, Fallback, Resolution, Translator, DEFAULT_LOCALE, MISSING_TEXT};
