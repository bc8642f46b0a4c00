use svcpin_core::manifest::Manifest;
use tempfile::TempDir;

const SCENARIO_TOML: &str = r#"
[services.service_x]
service_y = "1.2.3"
service_z = "1.4.*"

[services.service_y]
service_z = "1.4.1"

[available]
service_y = ["1.2.3", "1.5.0", "1.5.1"]
service_z = ["1.4.0", "1.4.1", "1.5.0"]
"#;

#[test]
fn parse_services_and_available() {
    let manifest = Manifest::from_str(SCENARIO_TOML).unwrap();
    assert_eq!(manifest.services.len(), 2);
    assert_eq!(manifest.services["service_x"]["service_z"], "1.4.*");
    assert_eq!(manifest.services["service_y"]["service_z"], "1.4.1");
    assert_eq!(
        manifest.catalog().versions("service_y"),
        &["1.2.3", "1.5.0", "1.5.1"]
    );
}

#[test]
fn service_specs_are_ordered_by_name() {
    let manifest = Manifest::from_str(SCENARIO_TOML).unwrap();
    let specs = manifest.service_specs();
    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["service_x", "service_y"]);
    assert_eq!(specs[0].constraint_on("service_y"), Some("1.2.3"));
}

#[test]
fn referenced_dependencies_are_deduplicated() {
    let manifest = Manifest::from_str(SCENARIO_TOML).unwrap();
    assert_eq!(
        manifest.referenced_dependencies(),
        vec!["service_y", "service_z"]
    );
}

#[test]
fn empty_manifest_is_valid() {
    let manifest = Manifest::from_str("").unwrap();
    assert!(manifest.services.is_empty());
    assert!(manifest.catalog().is_empty());
}

#[test]
fn service_without_dependencies() {
    let manifest = Manifest::from_str("[services.leaf]\n").unwrap();
    assert_eq!(manifest.services.len(), 1);
    assert!(manifest.services["leaf"].is_empty());
    assert!(manifest.referenced_dependencies().is_empty());
}

#[test]
fn non_string_constraint_is_rejected() {
    let err = Manifest::from_str("[services.a]\nb = 1\n").unwrap_err();
    assert!(err.to_string().contains("Manifest error"), "got: {err}");
}

#[test]
fn from_path_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("svcpin.toml");
    std::fs::write(&path, SCENARIO_TOML).unwrap();
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.services.len(), 2);
}

#[test]
fn from_path_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = Manifest::from_path(&tmp.path().join("svcpin.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}
