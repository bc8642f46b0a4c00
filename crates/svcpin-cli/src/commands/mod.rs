//! Command dispatch and handler modules.

mod lock;
mod resolve;
mod why;

use std::path::PathBuf;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            catalog,
            format,
            all_conflicts,
        } => resolve::exec(catalog, format, all_conflicts),
        Command::Lock {
            catalog,
            check,
            all_conflicts,
        } => lock::exec(catalog, check, all_conflicts),
        Command::Why {
            dependency,
            catalog,
        } => why::exec(&dependency, catalog),
    }
}

/// The project root found by walking up from the working directory.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(svcpin_util::errors::SvcpinError::Io)?;
    svcpin_ops::find_project_root(&cwd)
}
