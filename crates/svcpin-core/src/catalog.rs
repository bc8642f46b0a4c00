//! The catalog of published versions for each dependency.
//!
//! A catalog is supplied wholesale by the caller, either inline in the
//! `[available]` table of `svcpin.toml` or from a standalone TOML / JSON file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use svcpin_util::errors::SvcpinError;

/// Available version strings per dependency name.
///
/// Version order within an entry is irrelevant; the resolver compares parsed
/// versions, never positions or raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    versions: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the available versions of `dependency`, replacing any
    /// previous entry.
    pub fn insert<I, S>(&mut self, dependency: impl Into<String>, versions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions.insert(
            dependency.into(),
            versions.into_iter().map(Into::into).collect(),
        );
    }

    /// Versions published for `dependency`. Unknown dependencies have none.
    pub fn versions(&self, dependency: &str) -> &[String] {
        self.versions
            .get(dependency)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, dependency: &str) -> bool {
        self.versions.contains_key(dependency)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.versions
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }

    /// Load a standalone catalog file.
    ///
    /// Files ending in `.json` are read as a JSON object of arrays; anything
    /// else is read as a flat TOML table of arrays.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SvcpinError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            "loaded catalog with {} dependencies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SvcpinError::Catalog {
                message: format!("Failed to parse TOML catalog: {e}"),
            }
            .into()
        })
    }

    pub fn from_json_str(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            SvcpinError::Catalog {
                message: format!("Failed to parse JSON catalog: {e}"),
            }
            .into()
        })
    }
}

impl<K, V, S> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for (name, versions) in iter {
            catalog.insert(name, versions);
        }
        catalog
    }
}
