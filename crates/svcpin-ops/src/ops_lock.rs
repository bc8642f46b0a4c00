//! Operation: resolve and write, or verify, `svcpin.lock`.

use std::path::Path;

use svcpin_core::config::GlobalConfig;
use svcpin_core::lockfile::Lockfile;
use svcpin_util::errors::SvcpinError;

use crate::{effective_mode, Project};

/// Options for `svcpin lock`.
#[derive(Debug, Default)]
pub struct LockOptions<'a> {
    pub catalog: Option<&'a Path>,
    /// Verify the existing lockfile instead of rewriting it.
    pub check: bool,
    pub all_conflicts: bool,
}

/// Resolve the project and regenerate `svcpin.lock`, or with `check`, fail
/// if the lockfile on disk differs from a fresh resolution.
pub fn lock(project_root: &Path, opts: &LockOptions<'_>) -> miette::Result<()> {
    let config = GlobalConfig::load()?;
    let project = Project::load(project_root, opts.catalog)?;
    let resolution = project.resolve(effective_mode(opts.all_conflicts, &config))?;
    let fresh = Lockfile::from_pins(resolution.iter());
    let lockfile_path = project.lockfile_path();

    if opts.check {
        if !lockfile_path.is_file() {
            return Err(SvcpinError::Lockfile {
                message: "svcpin.lock is missing; run `svcpin lock` to create it".to_string(),
            }
            .into());
        }
        let existing = Lockfile::from_path(&lockfile_path)?;
        let changes = diff(&existing, &fresh);
        if !changes.is_empty() {
            return Err(SvcpinError::Lockfile {
                message: format!(
                    "svcpin.lock is out of date:\n  {}",
                    changes.join("\n  ")
                ),
            }
            .into());
        }
        svcpin_util::status::status("Verified", "svcpin.lock is up to date");
        return Ok(());
    }

    fresh.write_to(&lockfile_path)?;
    svcpin_util::status::status("Locked", &format!("{} dependencies", fresh.pin.len()));
    Ok(())
}

/// Human-readable differences between two lockfiles, by dependency name.
pub fn diff(existing: &Lockfile, fresh: &Lockfile) -> Vec<String> {
    let old = existing.to_map();
    let new = fresh.to_map();
    let mut changes = Vec::new();

    for (name, version) in &new {
        match old.get(name) {
            None => changes.push(format!("+ {name} {version}")),
            Some(prev) if prev != version => changes.push(format!("~ {name} {prev} -> {version}")),
            Some(_) => {}
        }
    }
    for (name, version) in &old {
        if !new.contains_key(name) {
            changes.push(format!("- {name} {version}"));
        }
    }
    changes
}
