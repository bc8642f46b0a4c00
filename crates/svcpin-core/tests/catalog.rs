use svcpin_core::catalog::Catalog;
use tempfile::TempDir;

#[test]
fn unknown_dependency_has_no_versions() {
    let catalog = Catalog::new();
    assert!(catalog.versions("missing").is_empty());
    assert!(!catalog.contains("missing"));
}

#[test]
fn insert_replaces_previous_entry() {
    let mut catalog = Catalog::new();
    catalog.insert("svc", ["1.0.0"]);
    catalog.insert("svc", ["2.0.0", "2.1.0"]);
    assert_eq!(catalog.versions("svc"), &["2.0.0", "2.1.0"]);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn collect_from_iterator() {
    let catalog: Catalog = [("a", vec!["1.0.0"]), ("b", vec!["2.0.0", "2.0.1"])]
        .into_iter()
        .collect();
    assert_eq!(catalog.len(), 2);
    let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn parse_toml_catalog() {
    let catalog = Catalog::from_toml_str(
        r#"
service_y = ["1.2.3", "1.5.0"]
service_z = []
"#,
    )
    .unwrap();
    assert_eq!(catalog.versions("service_y"), &["1.2.3", "1.5.0"]);
    assert!(catalog.contains("service_z"));
    assert!(catalog.versions("service_z").is_empty());
}

#[test]
fn parse_json_catalog() {
    let catalog =
        Catalog::from_json_str(r#"{"service_y": ["1.2.3"], "service_z": ["1.4.0", "1.4.1"]}"#)
            .unwrap();
    assert_eq!(catalog.versions("service_z"), &["1.4.0", "1.4.1"]);
}

#[test]
fn json_catalog_rejects_scalar_entry() {
    let err = Catalog::from_json_str(r#"{"service_y": "1.2.3"}"#).unwrap_err();
    assert!(err.to_string().contains("Catalog error"), "got: {err}");
}

#[test]
fn from_path_picks_format_by_extension() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("catalog.json");
    std::fs::write(&json, r#"{"a": ["1.0.0"]}"#).unwrap();
    let toml = tmp.path().join("catalog.toml");
    std::fs::write(&toml, "a = [\"2.0.0\"]\n").unwrap();

    assert_eq!(Catalog::from_path(&json).unwrap().versions("a"), &["1.0.0"]);
    assert_eq!(Catalog::from_path(&toml).unwrap().versions("a"), &["2.0.0"]);
}
