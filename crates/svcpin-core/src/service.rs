use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A service and the version constraints it declares on its dependencies.
///
/// Constraint text is kept as written (`"1.2.3"`, `"1.4.*"`, `">=1.0.0, <2.0.0"`)
/// and only parsed when a resolution run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub name: String,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl ServiceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: BTreeMap::new(),
        }
    }

    /// Builder-style helper declaring a constraint on `dependency`.
    pub fn with_dependency(
        mut self,
        dependency: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.dependencies
            .insert(dependency.into(), constraint.into());
        self
    }

    /// The constraint this service declares on `dependency`, if any.
    pub fn constraint_on(&self, dependency: &str) -> Option<&str> {
        self.dependencies.get(dependency).map(|s| s.as_str())
    }
}
