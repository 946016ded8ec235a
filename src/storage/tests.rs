//! Tests for JSON persistence and schema validation

use super::*;
use crate::error::{ErrorCode, RosterError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn shipped_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SCHEMA_FILE)
}

fn sample_students() -> Vec<Student> {
    vec![
        Student::new("Петров Б.Б.", "ИВТ-б-о-21-1", vec![3, 4, 5, 5, 5]),
        Student::new("Ivanov A.A.", "101", vec![5, 5, 4, 5, 5]),
    ]
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");
    let store = StudentStore::new(shipped_schema());
    let students = sample_students();

    store.save(&path, &students).unwrap();
    let loaded = store.load(&path).unwrap();

    assert_eq!(loaded, students);
}

#[test]
fn test_empty_roster_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    let store = StudentStore::new(shipped_schema());

    store.save(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    assert!(store.load(&path).unwrap().is_empty());
}

#[test]
fn test_saved_file_format() {
    let students = vec![Student::new("Сидоров В.В.", "101", vec![5, 4])];
    let json = to_pretty_json(&students).unwrap();

    let expected = "[\n    {\n        \"name\": \"Сидоров В.В.\",\n        \"group_number\": \"101\",\n        \"grades\": [\n            5,\n            4\n        ]\n    }\n]\n";
    assert_eq!(json, expected);
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.json");
    fs::write(&path, "stale content that is much longer than the new file").unwrap();

    save_students(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn test_save_to_unwritable_path_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("out.json");

    let err = save_students(&path, &sample_students()).unwrap_err();
    assert!(matches!(err, RosterError::Storage { .. }));
    assert_eq!(err.code(), ErrorCode::STORAGE_NOT_FOUND);
}

#[test]
fn test_missing_required_field_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"[{"name": "Ivanov A.A.", "group_number": "101"}]"#).unwrap();

    let err = StudentStore::new(shipped_schema()).load(&path).unwrap_err();
    assert!(err.is_validation());
    match err {
        RosterError::Validation { violations, .. } => {
            assert_eq!(violations.len(), 1);
            assert!(violations[0].contains("grades"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_wrong_types_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{"name": "A", "group_number": 101, "grades": [5, "4"]}]"#,
    )
    .unwrap();

    let err = StudentStore::new(shipped_schema()).load(&path).unwrap_err();
    match err {
        RosterError::Validation { violations, .. } => assert_eq!(violations.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_empty_grades_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"[{"name": "A", "group_number": "1", "grades": []}]"#).unwrap();

    let err = StudentStore::new(shipped_schema()).load(&path).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_non_array_document_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("object.json");
    fs::write(&path, r#"{"name": "A", "group_number": "1", "grades": [5]}"#).unwrap();

    let err = StudentStore::new(shipped_schema()).load(&path).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_missing_data_file_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = StudentStore::new(shipped_schema())
        .load(&temp_dir.path().join("nope.json"))
        .unwrap_err();

    assert!(!err.is_validation());
    assert_eq!(err.code(), ErrorCode::STORAGE_NOT_FOUND);
}

#[test]
fn test_malformed_json_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "[{\"name\": ").unwrap();

    let err = StudentStore::new(shipped_schema()).load(&path).unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(err.code(), ErrorCode::STORAGE_MALFORMED_JSON);
}

#[test]
fn test_missing_schema_is_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");
    save_students(&path, &sample_students()).unwrap();

    let err = StudentStore::new(temp_dir.path().join("no-schema.json"))
        .load(&path)
        .unwrap_err();
    assert!(matches!(err, RosterError::Schema { .. }));
    assert_eq!(err.code(), ErrorCode::SCHEMA_NOT_FOUND);
}

#[test]
fn test_malformed_schema_is_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema.json");
    fs::write(&schema_path, "not json").unwrap();

    let err = SchemaValidator::from_file(&schema_path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SCHEMA_MALFORMED);
}

#[test]
fn test_uncompilable_schema_is_schema_error() {
    let schema = serde_json::json!({"type": 12});
    let err = SchemaValidator::from_value(&schema, Path::new("inline.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SCHEMA_UNCOMPILABLE);
}

#[test]
fn test_permissive_schema_still_requires_record_shape() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema.json");
    fs::write(&schema_path, "{}").unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, r#"[{"name": "A"}]"#).unwrap();

    let err = StudentStore::new(schema_path).load(&path).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.code(), ErrorCode::VALIDATION_RECORD_SHAPE);
}

#[test]
fn test_default_store_uses_relative_schema_path() {
    let store = StudentStore::default();
    assert_eq!(store.schema_path(), Path::new("student-schema.json"));
}
