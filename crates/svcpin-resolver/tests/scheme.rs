//! The resolver only talks to versions through `VersionScheme`, so any
//! totally ordered scheme plugs in.

use std::collections::BTreeMap;

use svcpin_core::catalog::Catalog;
use svcpin_core::service::ServiceSpec;
use svcpin_resolver::scheme::{SchemeError, VersionScheme};
use svcpin_resolver::{ResolveError, Resolver};

/// Integer "build numbers" with `>=N` and `<N` constraints.
struct BuildNumbers;

#[derive(Debug)]
enum Bound {
    AtLeast(u32),
    Below(u32),
}

impl VersionScheme for BuildNumbers {
    type Version = u32;
    type Constraint = Bound;

    fn parse_version(&self, text: &str) -> Result<u32, SchemeError> {
        text.parse().map_err(|_| SchemeError::InvalidVersion {
            text: text.to_string(),
            reason: "not a build number".to_string(),
        })
    }

    fn parse_constraint(&self, text: &str) -> Result<Bound, SchemeError> {
        let invalid = || SchemeError::InvalidConstraint {
            text: text.to_string(),
            reason: "expected >=N or <N".to_string(),
        };
        if let Some(n) = text.strip_prefix(">=") {
            n.parse().map(Bound::AtLeast).map_err(|_| invalid())
        } else if let Some(n) = text.strip_prefix('<') {
            n.parse().map(Bound::Below).map_err(|_| invalid())
        } else {
            Err(invalid())
        }
    }

    fn allows(&self, constraint: &Bound, version: &u32) -> bool {
        match constraint {
            Bound::AtLeast(n) => version >= n,
            Bound::Below(n) => version < n,
        }
    }
}

#[test]
fn custom_scheme_resolves_highest_in_range() {
    let services = vec![
        ServiceSpec::new("a").with_dependency("b", ">=10"),
        ServiceSpec::new("c").with_dependency("b", "<40"),
    ];
    let catalog: Catalog = [("b", vec!["9", "12", "39", "40", "100"])]
        .into_iter()
        .collect();

    let result = Resolver::new(BuildNumbers)
        .resolve(&services, &catalog)
        .unwrap();
    let pins: BTreeMap<String, String> = result.into_map();
    assert_eq!(pins["b"], "39");
}

#[test]
fn custom_scheme_errors_propagate() {
    let services = vec![ServiceSpec::new("a").with_dependency("b", "~5")];
    let err = Resolver::new(BuildNumbers)
        .resolve(&services, &Catalog::new())
        .unwrap_err();
    assert!(
        matches!(
            err,
            ResolveError::Scheme {
                source: SchemeError::InvalidConstraint { .. },
                ..
            }
        ),
        "got: {err}"
    );
}
