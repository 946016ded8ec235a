//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The schema shipped at the crate root
pub fn shipped_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("student-schema.json")
}

/// Test context builder for setting up a working directory for the binary
pub struct TestContextBuilder {
    temp_dir: TempDir,
    with_schema: bool,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            with_schema: false,
            initial_files: Vec::new(),
        })
    }

    /// Copy the shipped `student-schema.json` into the working directory
    pub fn with_schema(mut self) -> Self {
        self.with_schema = true;
        self
    }

    /// Add an initial file
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.initial_files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        let path = self.temp_dir.path();

        if self.with_schema {
            fs::copy(shipped_schema(), path.join("student-schema.json"))?;
        }

        for (file_path, content) in self.initial_files {
            let full_path = path.join(file_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// Test context that manages temporary directories and cleanup
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Get the path to the test directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file from the test directory
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.temp_dir.path().join(path);
        Ok(fs::read_to_string(full_path)?)
    }

    /// Check if a file exists
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.temp_dir.path().join(path).exists()
    }

    /// A `roster` command running inside this directory with a clean environment
    pub fn roster(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("roster").unwrap();
        cmd.current_dir(self.path())
            .env_remove("ROSTER_SCHEMA")
            .env_remove("ROSTER_AVERAGE")
            .env_remove("ROSTER_PROMPT")
            .env_remove("RUST_LOG");
        cmd
    }
}
