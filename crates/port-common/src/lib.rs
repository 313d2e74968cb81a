//! # Port Common
//!
//! Shared types, utilities, and common functionality for port-copy.
//!
//! This crate provides the foundational types used across the workspace:
//! the application error type, the payloads sent back over the command bus,
//! and the HTML escaping applied to resolved copy.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
