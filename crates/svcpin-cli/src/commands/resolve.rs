//! Handler for `svcpin resolve`.

use std::path::PathBuf;

use miette::Result;

use svcpin_core::config::OutputFormat;
use svcpin_ops::ops_resolve::{self, ResolveOptions};

pub fn exec(
    catalog: Option<PathBuf>,
    format: Option<OutputFormat>,
    all_conflicts: bool,
) -> Result<()> {
    let project_root = super::project_root()?;

    let opts = ResolveOptions {
        catalog,
        format,
        all_conflicts,
    };

    ops_resolve::resolve(&project_root, &opts)
}
