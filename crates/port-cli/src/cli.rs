//! Command line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve the localized copy of the data donation port.
#[derive(Debug, Parser)]
#[command(name = "port-copy", version, about)]
pub struct Cli {
    /// Configuration file (YAML, TOML, or JSON).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale to resolve copy for. Defaults to the configured default locale.
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// What to print.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the copy of a page.
    Page {
        /// The page to print.
        #[arg(value_enum)]
        page: PageKind,
        /// Platform whose donation page to print.
        #[arg(long, default_value = "Instagram")]
        platform: String,
    },
    /// Resolve entries of a copy catalog.
    Lookup {
        /// Catalog file or Fluent directory. Defaults to the configured catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Message ids to resolve.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Report copy that lacks text for a supported locale.
    ///
    /// Checks the given or configured catalog, or the built-in page copy
    /// when there is none.
    Check {
        /// Catalog file or Fluent directory. Defaults to the configured catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Pages with built-in copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    /// The consent page opening the flow.
    Splash,
    /// The per-platform page that collects a data download.
    Donation,
    /// The thank-you page closing the flow.
    End,
}
