//! Main entry point for port-copy.

use anyhow::Context;
use clap::Parser;
use port_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli).context("port-copy failed")
}
