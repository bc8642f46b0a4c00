//! Per-dependency breakdown of which constraints accept which versions.

use std::fmt;

use serde::Serialize;

use svcpin_core::catalog::Catalog;
use svcpin_core::service::ServiceSpec;

use crate::conflict::DeclaredConstraint;
use crate::constraints::ConstraintSet;
use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::scheme::VersionScheme;

/// How every available version of one dependency fares against the
/// constraints declared on it.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub dependency: String,
    pub declared: Vec<DeclaredConstraint>,
    pub candidates: Vec<CandidateVerdict>,
    pub selected: Option<String>,
}

/// One catalog version and the declared constraints that reject it.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateVerdict {
    pub version: String,
    pub rejected_by: Vec<DeclaredConstraint>,
}

impl CandidateVerdict {
    pub fn is_allowed(&self) -> bool {
        self.rejected_by.is_empty()
    }
}

impl Explanation {
    /// Whether any service declares a constraint on this dependency.
    pub fn is_referenced(&self) -> bool {
        !self.declared.is_empty()
    }
}

impl<S: VersionScheme> Resolver<S> {
    /// Explain how `dependency` would resolve.
    ///
    /// Malformed constraints anywhere in `services` and malformed versions in
    /// the dependency's catalog entry are reported the same way `resolve`
    /// reports them. A dependency no service references has its catalog
    /// entry listed as-is, without parsing.
    pub fn explain<'a, I>(
        &self,
        services: I,
        catalog: &Catalog,
        dependency: &str,
    ) -> Result<Explanation, ResolveError>
    where
        I: IntoIterator<Item = &'a ServiceSpec>,
    {
        let constraints = ConstraintSet::collect(self.scheme(), services)?;
        let requirements = constraints.get(dependency).unwrap_or(&[]);
        let available = catalog.versions(dependency);

        if requirements.is_empty() {
            // never parsed, matching `resolve`
            let candidates = available
                .iter()
                .map(|text| CandidateVerdict {
                    version: text.clone(),
                    rejected_by: Vec::new(),
                })
                .collect();
            return Ok(Explanation {
                dependency: dependency.to_string(),
                declared: Vec::new(),
                candidates,
                selected: None,
            });
        }

        let mut candidates = Vec::with_capacity(available.len());
        for text in available {
            let version = self.parse_version(dependency, text)?;
            let rejected_by = requirements
                .iter()
                .filter(|r| !self.scheme().allows(&r.constraint, &version))
                .map(|r| r.declared())
                .collect();
            candidates.push(CandidateVerdict {
                version: text.clone(),
                rejected_by,
            });
        }

        let selected = self
            .select(dependency, requirements, available)?
            .map(str::to_string);

        Ok(Explanation {
            dependency: dependency.to_string(),
            declared: requirements.iter().map(|r| r.declared()).collect(),
            candidates,
            selected,
        })
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_referenced() {
            return write!(f, "{} is not required by any service.", self.dependency);
        }

        writeln!(f, "{} is required by:", self.dependency)?;
        for d in &self.declared {
            writeln!(f, "  {} ({})", d.service, d.constraint)?;
        }

        if self.candidates.is_empty() {
            writeln!(f, "No versions available.")?;
        } else {
            writeln!(f, "Available versions:")?;
            for c in &self.candidates {
                if c.is_allowed() {
                    writeln!(f, "  {}  ok", c.version)?;
                } else {
                    let by: Vec<String> = c
                        .rejected_by
                        .iter()
                        .map(|d| format!("{} {}", d.service, d.constraint))
                        .collect();
                    writeln!(f, "  {}  rejected by {}", c.version, by.join(", "))?;
                }
            }
        }

        match &self.selected {
            Some(v) => write!(f, "Selected: {v}"),
            None => write!(f, "Selected: none"),
        }
    }
}
