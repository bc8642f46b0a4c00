use svcpin_core::catalog::Catalog;
use svcpin_core::config::ResolveMode;
use svcpin_core::service::ServiceSpec;
use svcpin_resolver::scheme::{SemverScheme, VersionScheme};
use svcpin_resolver::{resolve, ResolveError, ResolveOptions, Resolver};

fn available() -> Catalog {
    [
        ("service_y", vec!["1.2.3", "1.5.0", "1.5.1"]),
        ("service_z", vec!["1.4.0", "1.4.1", "1.5.0"]),
    ]
    .into_iter()
    .collect()
}

fn compatible_services() -> Vec<ServiceSpec> {
    vec![
        ServiceSpec::new("service_x")
            .with_dependency("service_y", "1.2.3")
            .with_dependency("service_z", "1.4.*"),
        ServiceSpec::new("service_y").with_dependency("service_z", "1.4.1"),
    ]
}

fn conflicting_services() -> Vec<ServiceSpec> {
    vec![
        ServiceSpec::new("service_x")
            .with_dependency("service_y", "1.2.3")
            .with_dependency("service_z", "1.4.*"),
        ServiceSpec::new("service_y").with_dependency("service_z", "1.5.*"),
    ]
}

fn unresolvable_name(err: ResolveError) -> String {
    match err {
        ResolveError::Unresolvable { dependency } => dependency,
        other => panic!("expected an unresolvable dependency, got: {other}"),
    }
}

#[test]
fn compatible_constraints_resolve() {
    let result = resolve(&compatible_services(), &available()).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.get("service_y"), Some("1.2.3"));
    assert_eq!(result.get("service_z"), Some("1.4.1"));
}

#[test]
fn disjoint_wildcards_fail_on_shared_dependency() {
    let err = resolve(&conflicting_services(), &available()).unwrap_err();
    assert_eq!(err.to_string(), "Cannot resolve version for service_z");
    assert_eq!(unresolvable_name(err), "service_z");
}

#[test]
fn dependency_missing_from_catalog_fails() {
    let services = vec![ServiceSpec::new("service_x").with_dependency("service_q", "*")];
    let err = resolve(&services, &available()).unwrap_err();
    assert_eq!(unresolvable_name(err), "service_q");
}

#[test]
fn empty_input_resolves_to_empty() {
    let result = resolve(&Vec::<ServiceSpec>::new(), &Catalog::new()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn services_without_dependencies_resolve_to_empty() {
    let services = vec![ServiceSpec::new("leaf")];
    let result = resolve(&services, &available()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn resolution_is_deterministic() {
    let first = resolve(&compatible_services(), &available()).unwrap();
    let second = resolve(&compatible_services(), &available()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn service_order_does_not_matter() {
    let mut reversed = compatible_services();
    reversed.reverse();
    assert_eq!(
        resolve(&reversed, &available()).unwrap(),
        resolve(&compatible_services(), &available()).unwrap()
    );
}

#[test]
fn chosen_versions_are_sound_and_maximal() {
    let services = vec![
        ServiceSpec::new("api")
            .with_dependency("db", ">=1.0.0, <2.0.0")
            .with_dependency("cache", "^3.1"),
        ServiceSpec::new("worker")
            .with_dependency("db", "~1.4")
            .with_dependency("cache", ">=3.2.0"),
    ];
    let catalog: Catalog = [
        ("db", vec!["1.3.9", "1.4.0", "1.4.12", "1.4.2", "1.5.0", "2.0.0"]),
        ("cache", vec!["3.0.0", "3.1.5", "3.2.0", "3.10.1", "4.0.0"]),
    ]
    .into_iter()
    .collect();

    let result = resolve(&services, &catalog).unwrap();
    assert_eq!(result.get("db"), Some("1.4.12"));
    assert_eq!(result.get("cache"), Some("3.10.1"));

    let scheme = SemverScheme;
    for (dependency, chosen) in result.iter() {
        assert!(catalog.versions(dependency).iter().any(|v| v == chosen));
        let chosen_version = scheme.parse_version(chosen).unwrap();
        let constraints: Vec<_> = services
            .iter()
            .filter_map(|s| s.constraint_on(dependency))
            .map(|text| scheme.parse_constraint(text).unwrap())
            .collect();
        assert!(constraints.iter().all(|c| scheme.allows(c, &chosen_version)));

        for other in catalog.versions(dependency) {
            let version = scheme.parse_version(other).unwrap();
            if constraints.iter().all(|c| scheme.allows(c, &version)) {
                assert!(version <= chosen_version, "{other} beats {chosen}");
            }
        }
    }
}

#[test]
fn unreferenced_catalog_entries_are_ignored() {
    let services = vec![ServiceSpec::new("service_x").with_dependency("service_y", "1.5.*")];
    let result = resolve(&services, &available()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("service_y"), Some("1.5.1"));
    assert!(result.get("service_z").is_none());
}

#[test]
fn malformed_constraint_propagates() {
    let services = vec![ServiceSpec::new("service_x").with_dependency("service_y", "1.2.3.4.5")];
    let err = resolve(&services, &available()).unwrap_err();
    assert!(matches!(err, ResolveError::Scheme { .. }), "got: {err}");
    assert!(err.to_string().starts_with("service_y: invalid version constraint"));
}

#[test]
fn collect_all_reports_the_same_conflict() {
    let resolver = Resolver::new(SemverScheme).with_options(ResolveOptions {
        mode: ResolveMode::CollectAll,
    });
    let err = resolver
        .resolve(&conflicting_services(), &available())
        .unwrap_err();
    let report = err.conflicts().expect("collect-all yields a report");
    assert_eq!(report.len(), 1);
    assert_eq!(report.conflicts[0].dependency, "service_z");
    assert_eq!(report.conflicts[0].available, vec!["1.4.0", "1.4.1", "1.5.0"]);
}

#[test]
fn collect_all_succeeds_like_fail_fast_when_resolvable() {
    let resolver = Resolver::new(SemverScheme).with_options(ResolveOptions {
        mode: ResolveMode::CollectAll,
    });
    assert_eq!(
        resolver.resolve(&compatible_services(), &available()).unwrap(),
        resolve(&compatible_services(), &available()).unwrap()
    );
}

#[test]
fn resolution_serializes_as_flat_map() {
    let result = resolve(&compatible_services(), &available()).unwrap();
    let map = result.into_map();
    assert_eq!(map.get("service_z").map(String::as_str), Some("1.4.1"));
}
