//! Operation: explain how a single dependency resolves.

use std::path::Path;

use svcpin_resolver::{Resolver, SemverScheme};

use crate::Project;

/// Print which services constrain `dependency` and which versions each
/// constraint rejects.
pub fn why(project_root: &Path, dependency: &str, catalog: Option<&Path>) -> miette::Result<()> {
    let project = Project::load(project_root, catalog)?;
    let explanation =
        Resolver::new(SemverScheme).explain(&project.services, &project.catalog, dependency)?;

    if explanation.is_referenced() && explanation.selected.is_none() {
        svcpin_util::status::status_warn(
            "Conflict",
            &format!("no available version of {dependency} satisfies every constraint"),
        );
    }
    println!("{explanation}");
    Ok(())
}
