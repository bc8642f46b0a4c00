//! Handler for `svcpin lock`.

use std::path::PathBuf;

use miette::Result;

use svcpin_ops::ops_lock::{self, LockOptions};

pub fn exec(catalog: Option<PathBuf>, check: bool, all_conflicts: bool) -> Result<()> {
    let project_root = super::project_root()?;

    let opts = LockOptions {
        catalog: catalog.as_deref(),
        check,
        all_conflicts,
    };

    ops_lock::lock(&project_root, &opts)
}
