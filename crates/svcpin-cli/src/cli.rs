//! CLI argument definitions for svcpin.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svcpin_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "svcpin",
    version,
    about = "Pin one version per service dependency",
    long_about = "svcpin reads the version constraints each service declares on its \
                  dependencies from svcpin.toml and picks, for every dependency, the \
                  highest available version that satisfies all of them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print one version per dependency
    Resolve {
        /// Catalog file (TOML or JSON) replacing the manifest's [available] table
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Output format: text, json
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Report every unresolvable dependency instead of stopping at the first
        #[arg(long)]
        all_conflicts: bool,
    },

    /// Resolve and write svcpin.lock
    Lock {
        /// Catalog file (TOML or JSON) replacing the manifest's [available] table
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Fail if svcpin.lock is missing or out of date instead of writing it
        #[arg(long)]
        check: bool,
        /// Report every unresolvable dependency instead of stopping at the first
        #[arg(long)]
        all_conflicts: bool,
    },

    /// Explain which constraints accept or reject each version of a dependency
    Why {
        /// Dependency name
        dependency: String,
        /// Catalog file (TOML or JSON) replacing the manifest's [available] table
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: svcpin_util::errors::SvcpinError| e.to_string())
}

pub fn parse() -> Cli {
    Cli::parse()
}
