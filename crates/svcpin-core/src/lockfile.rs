use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use svcpin_util::errors::SvcpinError;

/// Deterministic lockfile recording the version chosen for each dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    #[serde(default)]
    pub pin: Vec<LockedPin>,
}

/// A single dependency pinned to its resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPin {
    pub name: String,
    pub version: String,
}

impl Lockfile {
    /// Build a lockfile from `(dependency, version)` pairs, sorted by name.
    pub fn from_pins<I, K, V>(pins: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pin: Vec<LockedPin> = pins
            .into_iter()
            .map(|(name, version)| LockedPin {
                name: name.into(),
                version: version.into(),
            })
            .collect();
        pin.sort_by(|a, b| a.name.cmp(&b.name));
        Self { pin }
    }

    /// Load and parse a `svcpin.lock` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SvcpinError::Lockfile {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            SvcpinError::Lockfile {
                message: format!("Failed to parse lockfile: {e}"),
            }
            .into()
        })
    }

    /// Serialize the lockfile to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Serialize and write the lockfile to `path`.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        let body = self.to_string_pretty().map_err(|e| SvcpinError::Lockfile {
            message: format!("Failed to serialize lockfile: {e}"),
        })?;
        let content = format!("# This file is generated by svcpin. Do not edit by hand.\n\n{body}");
        svcpin_util::fs::write_atomic(path, &content).map_err(SvcpinError::Io)?;
        Ok(())
    }

    /// Version pinned for `name`, if present.
    pub fn pinned_version(&self, name: &str) -> Option<&str> {
        self.pin
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.version.as_str())
    }

    /// All pins as a name-to-version map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.pin
            .iter()
            .map(|p| (p.name.clone(), p.version.clone()))
            .collect()
    }
}
