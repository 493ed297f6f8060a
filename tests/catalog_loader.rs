//! Catalog Loader Integration Tests
//!
//! Tests for interchange document round-trips, fail-fast validation of
//! external catalogs, and file loading through CatalogSource.

use animdex::catalog::CATALOG_FORMAT_VERSION;
use animdex::{Catalog, CatalogError, CatalogSource, Category};
use tempfile::TempDir;

#[test]
fn test_export_import_round_trip() {
    let original = Catalog::builtin();
    let json = original.to_json().unwrap();

    let restored = Catalog::from_json_str(&json).unwrap();

    assert_eq!(restored.len(), original.len());
    for (a, b) in restored.examples().iter().zip(original.examples()) {
        assert_eq!(a.id, b.id, "exported ids survive the round trip");
        assert_eq!(a.title, b.title);
        assert_eq!(a.category, b.category);
        assert_eq!(a.preview_key, b.preview_key);
        assert_eq!(a.code_preview, b.code_preview);
        assert_eq!(a.explanation.overview, b.explanation.overview);
        assert_eq!(a.explanation.key_concepts, b.explanation.key_concepts);
        assert_eq!(a.explanation.tips, b.explanation.tips);
    }
}

#[test]
fn test_document_wire_format() {
    let catalog = Catalog::builtin();
    let document = catalog.to_document();

    assert_eq!(document.version, CATALOG_FORMAT_VERSION);
    assert!(document.exported_at.is_none(), "writers stamp the timestamp");

    // Field names on the wire stay snake_case
    let json = catalog.to_json().unwrap();
    for field in [
        "\"version\"",
        "\"category_id\"",
        "\"code_preview\"",
        "\"usage_example\"",
        "\"key_concepts\"",
        "\"preview_key\"",
    ] {
        assert!(json.contains(field), "missing wire field {field}");
    }
}

#[test]
fn test_record_order_is_store_order() {
    // Records deliberately interleave categories; the loaded catalog must
    // preserve document order, not regroup by category.
    let json = r#"{
        "version": 1,
        "examples": [
            { "title": "One", "description": "First", "category_id": "spring", "preview_key": "a" },
            { "title": "Two", "description": "Second", "category_id": "basic", "preview_key": "b" },
            { "title": "Three", "description": "Third", "category_id": "spring", "preview_key": "c" }
        ]
    }"#;

    let catalog = Catalog::from_json_str(json).unwrap();
    let titles: Vec<&str> = catalog.examples().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);

    let springs = catalog.filter_by_category(Category::Spring);
    let spring_titles: Vec<&str> = springs.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(spring_titles, vec!["One", "Three"]);
}

#[test]
fn test_minimal_document_defaults() {
    let json = r#"{
        "version": 1,
        "examples": [
            { "title": "Pulse", "description": "A pulse", "category_id": "basic", "preview_key": "pulse" }
        ]
    }"#;

    let catalog = Catalog::from_json_str(json).unwrap();
    assert_eq!(catalog.len(), 1);

    let example = &catalog.examples()[0];
    assert!(example.code_preview.is_empty());
    assert!(example.usage_example.is_empty());
    assert!(example.explanation.overview.is_empty());
    assert!(example.explanation.key_concepts.is_empty());
    assert!(example.explanation.tips.is_empty());
}

#[test]
fn test_unknown_category_fails_fast() {
    let json = r#"{
        "version": 1,
        "examples": [
            { "title": "Fine", "description": "Valid", "category_id": "basic", "preview_key": "a" },
            { "title": "Broken", "description": "Bad category", "category_id": "holograms", "preview_key": "b" }
        ]
    }"#;

    match Catalog::from_json_str(json) {
        Err(CatalogError::UnknownCategory(id)) => assert_eq!(id, "holograms"),
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn test_blank_title_fails_fast() {
    let json = r#"{
        "version": 1,
        "examples": [
            { "title": "  ", "description": "Blank title", "category_id": "basic", "preview_key": "a" }
        ]
    }"#;

    match Catalog::from_json_str(json) {
        Err(CatalogError::InvalidExample { reason, .. }) => {
            assert!(reason.contains("title"));
        }
        other => panic!("expected InvalidExample, got {other:?}"),
    }
}

#[test]
fn test_duplicate_id_fails_fast() {
    // Two records claiming the same explicit id would leave lookups
    // ambiguous, so the document is rejected as a whole.
    let json = r#"{
        "version": 1,
        "examples": [
            { "id": "5d9f3ab1-70c4-4e0a-9c3d-2f8a41e6b7d0", "title": "First", "description": "Original", "category_id": "basic", "preview_key": "a" },
            { "id": "5d9f3ab1-70c4-4e0a-9c3d-2f8a41e6b7d0", "title": "Second", "description": "Impostor", "category_id": "spring", "preview_key": "b" }
        ]
    }"#;

    match Catalog::from_json_str(json) {
        Err(CatalogError::InvalidExample { title, reason }) => {
            assert_eq!(title, "Second");
            assert!(reason.contains("duplicate id"));
        }
        other => panic!("expected InvalidExample, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = Catalog::from_json_str("{ definitely not json");
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_load_catalog_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    // Export the builtin catalog to a file, then load it back through the
    // configured source.
    let original = Catalog::builtin();
    tokio::fs::write(&path, original.to_json().unwrap())
        .await
        .unwrap();

    let loaded = CatalogSource::File(path).load().await.unwrap();
    assert_eq!(loaded.len(), original.len());
    for (a, b) in loaded.examples().iter().zip(original.examples()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.category, b.category);
    }
}

#[tokio::test]
async fn test_invalid_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    tokio::fs::write(&path, "{ not a catalog").await.unwrap();

    let err = CatalogSource::File(path.clone()).load().await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid catalog document"));
    assert!(message.contains("broken.json"));
}

#[tokio::test]
async fn test_bad_document_yields_no_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partial.json");

    // One valid record followed by an invalid one: loading must fail as a
    // whole rather than admit the valid prefix.
    let json = r#"{
        "version": 1,
        "examples": [
            { "title": "Fine", "description": "Valid", "category_id": "basic", "preview_key": "a" },
            { "title": "", "description": "Invalid", "category_id": "basic", "preview_key": "b" }
        ]
    }"#;
    tokio::fs::write(&path, json).await.unwrap();

    assert!(CatalogSource::File(path).load().await.is_err());
}
