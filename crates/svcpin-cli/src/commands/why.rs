//! Handler for `svcpin why`.

use std::path::PathBuf;

use miette::Result;

pub fn exec(dependency: &str, catalog: Option<PathBuf>) -> Result<()> {
    let project_root = super::project_root()?;
    svcpin_ops::ops_why::why(&project_root, dependency, catalog.as_deref())
}
