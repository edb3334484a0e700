//! End-to-end tests for creating, loading, editing and writing c3pm.json.

use c3pm_manifest::{Error, MANIFEST_FILENAME, Manifest, ManifestFields};
use serde_json::json;
use tempfile::TempDir;

fn fields(license: Option<&str>) -> ManifestFields {
    ManifestFields {
        name: "hello-world".to_string(),
        author: "Jane Doe".to_string(),
        description: "Says hello".to_string(),
        url: "https://example.com/hello".to_string(),
        email: "jane@example.com".to_string(),
        license: license.map(str::to_string),
    }
}

#[test]
fn test_fresh_manifest_layout() {
    let manifest = Manifest::create(fields(Some("MIT"))).unwrap();

    insta::assert_snapshot!(manifest.to_json_string(), @r#"
    {
        "name": "hello-world",
        "author": "Jane Doe",
        "version": "0.0.1",
        "description": "Says hello",
        "url": "https://example.com/hello",
        "email": "jane@example.com",
        "license": "MIT",
        "dependencies": [],
        "c3pm_version": "v0.2",
        "whatIsC3pm": "https://github.com/OlehKurachenko/c3pm"
    }
    "#);
}

#[test]
fn test_fresh_manifest_without_license() {
    let manifest = Manifest::create(fields(None)).unwrap();
    let output = manifest.to_json_string();

    assert!(!output.contains("\"license\""));
    let reparsed: Manifest = output.parse().unwrap();
    assert_eq!(reparsed.license(), None);
    assert_eq!(
        reparsed.keys().collect::<Vec<_>>(),
        vec![
            "name",
            "author",
            "version",
            "description",
            "url",
            "email",
            "dependencies",
            "c3pm_version",
            "whatIsC3pm",
        ]
    );
}

#[test]
fn test_serialization_is_idempotent() {
    let manifest = Manifest::create(fields(Some("MIT"))).unwrap();
    assert_eq!(manifest.to_json_string(), manifest.to_json_string());
}

#[test]
fn test_write_then_open() {
    let temp = TempDir::new().unwrap();
    let mut manifest = Manifest::create(fields(None)).unwrap();
    manifest
        .add_dependency(json!({"name": "fmt", "version": "10.0.0"}))
        .unwrap();
    manifest.write_in(temp.path()).unwrap();

    let loaded = Manifest::open_in(temp.path()).unwrap();
    assert_eq!(loaded.to_json_string(), manifest.to_json_string());
    assert_eq!(
        loaded.dependencies(),
        &[json!({"name": "fmt", "version": "10.0.0"})]
    );
}

#[test]
fn test_round_trip_foreign_document() {
    let temp = TempDir::new().unwrap();
    let source = r#"{
        "whatIsC3pm": "https://github.com/OlehKurachenko/c3pm",
        "dependencies": [{"version": "1.2", "name": "zlib"}, "opaque"],
        "name": "legacy",
        "extra": {"b": true, "a": null},
        "version": 2.5
    }"#;
    std::fs::write(temp.path().join(MANIFEST_FILENAME), source).unwrap();

    let loaded = Manifest::open_in(temp.path()).unwrap();
    let first = loaded.to_json_string();
    let reparsed: Manifest = first.parse().unwrap();

    assert_eq!(
        reparsed.keys().collect::<Vec<_>>(),
        vec!["whatIsC3pm", "dependencies", "name", "extra", "version"]
    );
    assert_eq!(reparsed.to_json_string(), first);
    assert!(first.find("\"version\": \"1.2\"").unwrap() < first.find("\"name\": \"zlib\"").unwrap());
}

#[test]
fn test_rename_and_persist() {
    let temp = TempDir::new().unwrap();
    Manifest::create(fields(None))
        .unwrap()
        .write_in(temp.path())
        .unwrap();

    let mut manifest = Manifest::open_in(temp.path()).unwrap();
    let err = manifest.set_name("Hello World").unwrap_err();
    assert!(matches!(*err, Error::Validation { .. }));
    assert_eq!(manifest.name(), "hello-world");

    manifest.set_name("hello_there").unwrap();
    manifest.write_in(temp.path()).unwrap();

    let loaded = Manifest::open_in(temp.path()).unwrap();
    assert_eq!(loaded.name(), "hello_there");
    assert_eq!(loaded.keys().next(), Some("name"));
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Manifest::open_in(temp.path());
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[test]
fn test_name_boundaries_on_parse() {
    let ok = format!(r#"{{"name": "{}"}}"#, "a".repeat(100));
    assert!(ok.parse::<Manifest>().is_ok());

    let long = format!(r#"{{"name": "{}"}}"#, "a".repeat(101));
    assert_eq!(
        long.parse::<Manifest>().unwrap_err().reason(),
        Some("length of name is greater than 100")
    );

    assert!(r#"{"name": "a"}"#.parse::<Manifest>().is_ok());
}
