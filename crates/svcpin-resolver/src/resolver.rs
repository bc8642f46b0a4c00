//! Core resolution algorithm: aggregate constraints per dependency, filter
//! the catalog, and pick the highest satisfying version.

use std::collections::BTreeMap;

use serde::Serialize;

use svcpin_core::catalog::Catalog;
use svcpin_core::config::ResolveMode;
use svcpin_core::service::ServiceSpec;

use crate::conflict::{ConflictReport, UnresolvedDependency};
use crate::constraints::{ConstraintSet, Requirement};
use crate::error::ResolveError;
use crate::scheme::{SemverScheme, VersionScheme};

/// The output of a successful resolution: one version per dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Resolution {
    pins: BTreeMap<String, String>,
}

impl Resolution {
    /// The version chosen for `dependency`, as written in the catalog.
    pub fn get(&self, dependency: &str) -> Option<&str> {
        self.pins.get(dependency).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Iterate pins in ascending dependency-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pins.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.pins
    }
}

/// Knobs for a resolution run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    pub mode: ResolveMode,
}

/// Resolves services against a catalog using a [`VersionScheme`].
///
/// Holds no state between runs; every call builds and drops its own
/// intermediate structures.
#[derive(Debug, Clone, Default)]
pub struct Resolver<S = SemverScheme> {
    scheme: S,
    options: ResolveOptions,
}

/// Resolve with the semver scheme and fail-fast semantics.
pub fn resolve<'a, I>(services: I, catalog: &Catalog) -> Result<Resolution, ResolveError>
where
    I: IntoIterator<Item = &'a ServiceSpec>,
{
    Resolver::new(SemverScheme).resolve(services, catalog)
}

impl<S: VersionScheme> Resolver<S> {
    pub fn new(scheme: S) -> Self {
        Self {
            scheme,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    /// Pick one version per dependency declared by `services`.
    ///
    /// Every constraint on a dependency must allow the chosen version, and the
    /// choice is the highest such version in `catalog`. Dependencies are
    /// processed in ascending name order. In fail-fast mode the first
    /// unresolvable dependency aborts the run; in collect-all mode all of them
    /// are reported together. Either way no partial result is returned.
    pub fn resolve<'a, I>(&self, services: I, catalog: &Catalog) -> Result<Resolution, ResolveError>
    where
        I: IntoIterator<Item = &'a ServiceSpec>,
    {
        let constraints = ConstraintSet::collect(&self.scheme, services)?;
        tracing::debug!(
            "resolving {} dependencies ({} mode)",
            constraints.len(),
            self.options.mode
        );

        let mut pins = BTreeMap::new();
        let mut report = ConflictReport::new();

        for (dependency, requirements) in constraints.iter() {
            let candidates = catalog.versions(dependency);
            match self.select(dependency, requirements, candidates)? {
                Some(version) => {
                    tracing::debug!("{dependency} -> {version}");
                    pins.insert(dependency.to_string(), version.to_string());
                }
                None if self.options.mode == ResolveMode::FailFast => {
                    tracing::debug!("{dependency} has no satisfying version");
                    return Err(ResolveError::Unresolvable {
                        dependency: dependency.to_string(),
                    });
                }
                None => {
                    tracing::debug!("{dependency} has no satisfying version");
                    report.add(UnresolvedDependency {
                        dependency: dependency.to_string(),
                        declared: requirements.iter().map(|r| r.declared()).collect(),
                        available: candidates.to_vec(),
                    });
                }
            }
        }

        if !report.is_empty() {
            return Err(ResolveError::Conflicts(report));
        }
        Ok(Resolution { pins })
    }

    /// The highest candidate every requirement allows, or `None`.
    ///
    /// Among candidates that parse to equal versions the first one wins.
    pub(crate) fn select<'c>(
        &self,
        dependency: &str,
        requirements: &[Requirement<S::Constraint>],
        candidates: &'c [String],
    ) -> Result<Option<&'c str>, ResolveError> {
        let mut best: Option<(S::Version, &'c str)> = None;

        for text in candidates {
            let version = self.parse_version(dependency, text)?;
            let allowed = requirements
                .iter()
                .all(|r| self.scheme.allows(&r.constraint, &version));
            if !allowed {
                tracing::trace!("{dependency} {text} rejected");
                continue;
            }
            let better = best
                .as_ref()
                .map_or(true, |(current, _)| version > *current);
            if better {
                best = Some((version, text.as_str()));
            }
        }

        Ok(best.map(|(_, text)| text))
    }

    pub(crate) fn parse_version(
        &self,
        dependency: &str,
        text: &str,
    ) -> Result<S::Version, ResolveError> {
        self.scheme
            .parse_version(text)
            .map_err(|source| ResolveError::Scheme {
                dependency: dependency.to_string(),
                source,
            })
    }
}
