//! JSON persistence for the roster
//!
//! Files are plain, human-readable JSON arrays of student objects. Loading
//! is gated by a JSON Schema document: the target file is parsed first and
//! the parsed value is validated, so nothing reaches the roster until it has
//! passed the schema.
//!
//! Failures are reported by category. A missing or unparsable data file is a
//! storage error, a missing or broken schema is a schema error, and only a
//! document that parses but breaks the schema is a validation error.

pub mod json;
pub mod schema;

#[cfg(test)]
mod tests;

pub use json::{load_students, read_document, save_students, to_pretty_json};
pub use schema::SchemaValidator;

use crate::error::Result;
use crate::roster::Student;
use std::path::{Path, PathBuf};

/// Default schema location, relative to the working directory
pub const DEFAULT_SCHEMA_FILE: &str = "student-schema.json";

/// Persistence front end bound to one schema location.
///
/// The schema is read on every load, so edits to it are picked up without a
/// restart and a missing schema only affects the `load` command.
#[derive(Debug, Clone)]
pub struct StudentStore {
    schema_path: PathBuf,
}

impl StudentStore {
    pub fn new(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
        }
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn save(&self, path: &Path, students: &[Student]) -> Result<()> {
        save_students(path, students)
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Student>> {
        let schema = SchemaValidator::from_file(&self.schema_path)?;
        load_students(path, &schema)
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_FILE)
    }
}
