//! Aggregation of declared constraints by dependency name.

use std::collections::BTreeMap;

use svcpin_core::service::ServiceSpec;

use crate::conflict::DeclaredConstraint;
use crate::error::ResolveError;
use crate::scheme::VersionScheme;

/// One parsed constraint together with where it came from.
#[derive(Debug, Clone)]
pub struct Requirement<C> {
    pub service: String,
    pub text: String,
    pub constraint: C,
}

impl<C> Requirement<C> {
    pub fn declared(&self) -> DeclaredConstraint {
        DeclaredConstraint {
            service: self.service.clone(),
            constraint: self.text.clone(),
        }
    }
}

/// Every parsed constraint, bucketed by the dependency it names.
///
/// A dependency has a bucket iff at least one service declares a constraint
/// on it. All constraints in a bucket apply together.
#[derive(Debug, Clone)]
pub struct ConstraintSet<C> {
    buckets: BTreeMap<String, Vec<Requirement<C>>>,
}

impl<C> ConstraintSet<C> {
    /// Parse and bucket every constraint declared by `services`.
    ///
    /// The first malformed constraint aborts collection.
    pub fn collect<'a, S, I>(scheme: &S, services: I) -> Result<Self, ResolveError>
    where
        S: VersionScheme<Constraint = C>,
        I: IntoIterator<Item = &'a ServiceSpec>,
    {
        let mut buckets: BTreeMap<String, Vec<Requirement<C>>> = BTreeMap::new();

        for service in services {
            for (dependency, text) in &service.dependencies {
                let constraint =
                    scheme
                        .parse_constraint(text)
                        .map_err(|source| ResolveError::Scheme {
                            dependency: dependency.clone(),
                            source,
                        })?;
                tracing::trace!("{} requires {dependency} {text}", service.name);
                buckets
                    .entry(dependency.clone())
                    .or_default()
                    .push(Requirement {
                        service: service.name.clone(),
                        text: text.clone(),
                        constraint,
                    });
            }
        }

        Ok(Self { buckets })
    }

    /// Constraints declared on `dependency`, if any service declares one.
    pub fn get(&self, dependency: &str) -> Option<&[Requirement<C>]> {
        self.buckets.get(dependency).map(|v| v.as_slice())
    }

    /// Iterate buckets in ascending dependency-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Requirement<C>])> {
        self.buckets
            .iter()
            .map(|(name, reqs)| (name.as_str(), reqs.as_slice()))
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
