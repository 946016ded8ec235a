//! Student file reader and writer

use super::schema::SchemaValidator;
use crate::error::helpers::io_storage_error;
use crate::error::{ErrorCode, ErrorExt, Result, RosterError};
use crate::roster::Student;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const INDENT: &[u8] = b"    ";

/// Serialize students as a pretty JSON array with four-space indentation.
///
/// Non-ASCII text is written as-is.
pub fn to_pretty_json(students: &[Student]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    students.serialize(&mut serializer).map_err(|e| {
        RosterError::storage_with_code(
            ErrorCode::STORAGE_SERIALIZATION_ERROR,
            "Failed to serialize students",
            None,
        )
        .with_source(e)
    })?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| {
        RosterError::storage_with_code(
            ErrorCode::STORAGE_SERIALIZATION_ERROR,
            "Serialized students are not UTF-8",
            None,
        )
        .with_source(e)
    })
}

/// Write every student to `path`, overwriting whatever is there
pub fn save_students(path: &Path, students: &[Student]) -> Result<()> {
    let json = to_pretty_json(students)?;
    fs::write(path, json).map_err(|e| io_storage_error(e, "write", path))?;
    info!(path = %path.display(), count = students.len(), "Saved students");
    Ok(())
}

/// Read `path` and parse it as JSON, without any schema check
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| io_storage_error(e, "read", path))?;
    serde_json::from_str(&content).to_storage_error(
        ErrorCode::STORAGE_MALFORMED_JSON,
        "File is not valid JSON",
        path,
    )
}

/// Turn a validated document into records
pub fn students_from_document(document: Value) -> Result<Vec<Student>> {
    serde_json::from_value(document).map_err(|e| {
        RosterError::Validation {
            code: ErrorCode::VALIDATION_RECORD_SHAPE,
            message: e.to_string(),
            violations: vec![e.to_string()],
        }
    })
}

/// Load students from `path`, trusting the content only after it passes `schema`
pub fn load_students(path: &Path, schema: &SchemaValidator) -> Result<Vec<Student>> {
    let document = read_document(path)?;
    schema.validate(&document)?;
    debug!(
        path = %path.display(),
        schema = %schema.path().display(),
        "Document passed schema validation"
    );

    let students = students_from_document(document)?;
    info!(path = %path.display(), count = students.len(), "Loaded students");
    Ok(students)
}
