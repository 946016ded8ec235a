//! JSON Schema gate for loaded documents

use crate::error::{ErrorCode, ErrorExt, Result, RosterError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A compiled student schema
#[derive(Debug)]
pub struct SchemaValidator {
    path: PathBuf,
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Read and compile the schema document at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::SCHEMA_NOT_FOUND
            } else {
                ErrorCode::SCHEMA_GENERIC
            };
            RosterError::schema_with_code(code, "Failed to read schema file", Some(path.to_path_buf()))
                .with_source(e)
        })?;

        let schema: Value = serde_json::from_str(&content).to_schema_error(
            ErrorCode::SCHEMA_MALFORMED,
            "Schema file is not valid JSON",
            path,
        )?;

        Self::from_value(&schema, path)
    }

    /// Compile an already parsed schema document
    pub fn from_value(schema: &Value, path: &Path) -> Result<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| {
            RosterError::schema_with_code(
                ErrorCode::SCHEMA_UNCOMPILABLE,
                format!("Schema is not a valid JSON Schema: {e}"),
                Some(path.to_path_buf()),
            )
        })?;
        debug!(schema = %path.display(), "Compiled student schema");

        Ok(Self {
            path: path.to_path_buf(),
            validator,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a parsed document, collecting every violation
    pub fn validate(&self, instance: &Value) -> Result<()> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            debug!(count = violations.len(), "Document failed schema validation");
            Err(RosterError::validation(violations))
        }
    }
}
