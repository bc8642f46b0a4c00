//! Reporting of dependencies no catalog version can satisfy.

use std::fmt;

use serde::Serialize;

/// A constraint as a service declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredConstraint {
    pub service: String,
    pub constraint: String,
}

/// A dependency for which no available version satisfies every declared
/// constraint.
#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedDependency {
    pub dependency: String,
    pub declared: Vec<DeclaredConstraint>,
    pub available: Vec<String>,
}

/// Every unresolvable dependency found in one collect-all run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<UnresolvedDependency>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: UnresolvedDependency) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Names of the unresolvable dependencies, in report order.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.conflicts.iter().map(|c| c.dependency.as_str())
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        write!(f, "Cannot resolve {} dependencies:", self.conflicts.len())?;
        for c in &self.conflicts {
            write!(f, "\n  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UnresolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declared: Vec<String> = self
            .declared
            .iter()
            .map(|d| format!("{} requires {}", d.service, d.constraint))
            .collect();
        if self.available.is_empty() {
            write!(
                f,
                "{}: no versions available ({})",
                self.dependency,
                declared.join(", ")
            )
        } else {
            write!(
                f,
                "{}: none of [{}] satisfies {}",
                self.dependency,
                self.available.join(", "),
                declared.join(", ")
            )
        }
    }
}
