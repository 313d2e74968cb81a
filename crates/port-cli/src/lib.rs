//! # Port CLI
//!
//! The `port-copy` command line tool: loads configuration, sets up logging,
//! and prints the resolved copy of pages and catalogs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;

pub use app::*;
pub use cli::*;
pub use error::*;
