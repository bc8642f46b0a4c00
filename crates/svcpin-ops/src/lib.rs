pub mod ops_lock;
pub mod ops_resolve;
pub mod ops_why;

use std::path::{Path, PathBuf};

use svcpin_core::catalog::Catalog;
use svcpin_core::config::{GlobalConfig, ResolveMode};
use svcpin_core::manifest::Manifest;
use svcpin_core::service::ServiceSpec;
use svcpin_core::{LOCKFILE_FILE, MANIFEST_FILE};
use svcpin_resolver::{Resolution, ResolveError, ResolveOptions, Resolver, SemverScheme};
use svcpin_util::errors::SvcpinError;

/// Everything a command needs from the project on disk.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub services: Vec<ServiceSpec>,
    pub catalog: Catalog,
}

impl Project {
    /// Load `svcpin.toml` from `project_root`.
    ///
    /// When `catalog_override` is given, that file replaces the manifest's
    /// `[available]` table entirely.
    pub fn load(project_root: &Path, catalog_override: Option<&Path>) -> miette::Result<Self> {
        let manifest = Manifest::from_path(&project_root.join(MANIFEST_FILE))?;
        let catalog = match catalog_override {
            Some(path) => Catalog::from_path(path)?,
            None => manifest.available.clone(),
        };
        tracing::info!(
            "loaded {} services and {} catalog entries from {}",
            manifest.services.len(),
            catalog.len(),
            project_root.display()
        );
        Ok(Self {
            root: project_root.to_path_buf(),
            services: manifest.service_specs(),
            catalog,
        })
    }

    pub fn resolve(&self, mode: ResolveMode) -> Result<Resolution, ResolveError> {
        Resolver::new(SemverScheme)
            .with_options(ResolveOptions { mode })
            .resolve(&self.services, &self.catalog)
    }

    pub fn lockfile_path(&self) -> PathBuf {
        self.root.join(LOCKFILE_FILE)
    }
}

/// Locate the directory holding `svcpin.toml`, starting at `start` and
/// walking up.
pub fn find_project_root(start: &Path) -> miette::Result<PathBuf> {
    svcpin_util::fs::find_ancestor_with(start, MANIFEST_FILE).ok_or_else(|| {
        SvcpinError::Manifest {
            message: format!(
                "Could not find {MANIFEST_FILE} in {} or any parent directory",
                start.display()
            ),
        }
        .into()
    })
}

/// The resolve mode after applying the `--all-conflicts` override.
pub fn effective_mode(all_conflicts: bool, config: &GlobalConfig) -> ResolveMode {
    if all_conflicts {
        ResolveMode::CollectAll
    } else {
        config.resolve.mode
    }
}
