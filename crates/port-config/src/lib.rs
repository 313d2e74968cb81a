//! # Port Config
//!
//! Type-safe configuration management for port-copy.
//!
//! This crate provides configuration loading from YAML, TOML, or JSON files,
//! environment overrides, and validation of the configured locales.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
