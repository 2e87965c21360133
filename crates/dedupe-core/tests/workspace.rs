use dedupe_core::workspace::{PackageDependency, Workspace};
use dedupe_util::errors::DedupeError;
use tempfile::TempDir;

const DESCRIPTOR: &str = "sfdx-project.json";

fn write_descriptor(tmp: &TempDir, json: &str) {
    std::fs::write(tmp.path().join(DESCRIPTOR), json).unwrap();
}

fn dep(package: &str) -> PackageDependency {
    PackageDependency {
        package: package.to_string(),
        version_number: None,
    }
}

#[test]
fn test_load_missing_descriptor() {
    let tmp = TempDir::new().unwrap();
    let err = Workspace::load(tmp.path(), DESCRIPTOR).unwrap_err();
    match err {
        DedupeError::MissingDescriptor { path } => {
            assert_eq!(path, tmp.path().join(DESCRIPTOR));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_malformed_descriptor() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(&tmp, "{ not json");
    let err = Workspace::load(tmp.path(), DESCRIPTOR).unwrap_err();
    assert!(matches!(err, DedupeError::Manifest { .. }), "got: {err}");
}

#[test]
fn test_load_preserves_descriptor_order() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        &tmp,
        r#"{
  "packageDirectories": [
    { "path": "packages/core", "package": "core" },
    { "path": "packages/app", "package": "app", "default": true,
      "dependencies": [{ "package": "core@1.2.0-1" }] },
    { "path": "packages/ui", "package": "ui" }
  ],
  "sourceApiVersion": "60.0"
}"#,
    );
    let ws = Workspace::load(tmp.path(), DESCRIPTOR).unwrap();
    let names: Vec<&str> = ws.packages.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["core", "app", "ui"]);
    assert_eq!(ws.default_package().unwrap().name(), "app");
    assert_eq!(
        ws.package_dir(&ws.packages[0]),
        tmp.path().join("packages/core")
    );
}

#[test]
fn test_entry_without_package_uses_path() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        &tmp,
        r#"{"packageDirectories": [{ "path": "force-app", "default": true }]}"#,
    );
    let ws = Workspace::load(tmp.path(), DESCRIPTOR).unwrap();
    assert_eq!(ws.default_package().unwrap().name(), "force-app");
}

#[test]
fn test_no_default_package() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        &tmp,
        r#"{"packageDirectories": [{ "path": "a", "package": "a" }]}"#,
    );
    let ws = Workspace::load(tmp.path(), DESCRIPTOR).unwrap();
    let err = ws.default_package().unwrap_err();
    assert!(matches!(err, DedupeError::NoDefaultPackage { .. }));
}

#[test]
fn test_multiple_default_packages_rejected() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        &tmp,
        r#"{"packageDirectories": [
            { "path": "a", "package": "a", "default": true },
            { "path": "b", "package": "b", "default": true }
        ]}"#,
    );
    let ws = Workspace::load(tmp.path(), DESCRIPTOR).unwrap();
    let err = ws.default_package().unwrap_err();
    assert!(matches!(err, DedupeError::NoDefaultPackage { .. }));
    assert!(err.to_string().contains("a, b"), "got: {err}");
}

#[test]
fn test_default_dependencies_follow_descriptor_order() {
    let tmp = TempDir::new().unwrap();
    write_descriptor(
        &tmp,
        r#"{"packageDirectories": [
            { "path": "c", "package": "c" },
            { "path": "b", "package": "b" },
            { "path": "x", "package": "x" },
            { "path": "a", "package": "a", "default": true,
              "dependencies": [{ "package": "b@2.0.0-1" }, { "package": "c" }, { "package": "ext@1.0" }] }
        ]}"#,
    );
    let ws = Workspace::load(tmp.path(), DESCRIPTOR).unwrap();
    let deps: Vec<&str> = ws
        .default_dependencies()
        .unwrap()
        .into_iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(deps, vec!["c", "b"]);
}

#[test]
fn test_dependency_package_name_strips_version() {
    assert_eq!(dep("core@1.2.0-1").package_name(), "core");
    assert_eq!(dep("core").package_name(), "core");
    assert_eq!(dep("@scope/lib@0.1.0").package_name(), "@scope/lib");
    assert_eq!(dep("@scope/lib").package_name(), "@scope/lib");
    assert_eq!(dep("é@1.0").package_name(), "é");
    assert_eq!(dep("ü").package_name(), "ü");
}
