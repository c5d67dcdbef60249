use std::io::Write;
use std::path::Path;

use indoc::indoc;
use showtype_lib::{TypeCatalog, TypeUnion};

use super::input_loader::{LoadError, load_catalog, load_json, read_input};

fn temp_json(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn reads_file_contents() {
    let file = temp_json("hello");
    assert_eq!(read_input(file.path()).unwrap(), "hello");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = read_input(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_json_error() {
    let file = temp_json("[{\"kind\": ");
    let err = load_json::<TypeUnion>(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON in '"));
}

#[test]
fn empty_union_is_rejected() {
    let file = temp_json("[]");
    let err = load_json::<TypeUnion>(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn loads_union() {
    let file = temp_json(r#"[{"kind": "opaque", "id": "int"}, {"kind": "opaque", "id": "null"}]"#);
    let union: TypeUnion = load_json(file.path()).unwrap();
    assert_eq!(union.len(), 2);
}

#[test]
fn loads_catalog() {
    let file = temp_json(indoc! {r#"
        [
          { "name": "App\\Collection", "template_params": ["TKey", "TValue"] },
          { "name": "App\\Model\\User" }
        ]
    "#});
    let catalog = load_catalog(Some(file.path())).unwrap();

    assert_eq!(catalog.len(), 2);
    let info = catalog.resolve("App\\Collection").unwrap();
    assert_eq!(info.short_name, "Collection");
    assert_eq!(
        info.template_params,
        Some(vec!["TKey".to_string(), "TValue".to_string()])
    );
}

#[test]
fn no_catalog_is_empty() {
    let catalog = load_catalog(None::<&Path>).unwrap();
    assert!(catalog.is_empty());
}
