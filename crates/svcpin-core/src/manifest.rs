use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use svcpin_util::errors::SvcpinError;

use crate::catalog::Catalog;
use crate::service::ServiceSpec;

/// The parsed representation of a `svcpin.toml` file.
///
/// ```toml
/// [services.service_x]
/// service_y = "1.2.3"
/// service_z = "1.4.*"
///
/// [available]
/// service_y = ["1.2.3", "1.5.0"]
/// service_z = ["1.4.0", "1.4.1"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Service name to its dependency constraints.
    #[serde(default)]
    pub services: BTreeMap<String, BTreeMap<String, String>>,

    /// Inline catalog; replaced wholesale by `--catalog` when given.
    #[serde(default)]
    pub available: Catalog,
}

impl Manifest {
    /// Load and parse a `svcpin.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SvcpinError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `svcpin.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SvcpinError::Manifest {
                message: format!("Failed to parse svcpin.toml: {e}"),
            }
            .into()
        })
    }

    /// The declared services as [`ServiceSpec`]s, ordered by name.
    pub fn service_specs(&self) -> Vec<ServiceSpec> {
        self.services
            .iter()
            .map(|(name, deps)| ServiceSpec {
                name: name.clone(),
                dependencies: deps.clone(),
            })
            .collect()
    }

    /// The inline catalog from `[available]`.
    pub fn catalog(&self) -> &Catalog {
        &self.available
    }

    /// Every dependency name referenced by at least one service.
    pub fn referenced_dependencies(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .services
            .values()
            .flat_map(|deps| deps.keys().map(|k| k.as_str()))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
