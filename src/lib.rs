//! # roster
//!
//! An interactive command-line manager for student records: name, group and
//! grades, kept sorted by average grade and persisted as schema-checked JSON.
//!
//! ## Usage
//!
//! ```bash
//! roster [--schema student-schema.json] [--average mean|fixed-five] [--load students.json]
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing, the REPL session and table rendering
//! - `config` - Layered configuration (defaults, TOML file, environment)
//! - `core` - Pure sort-key, selection and parsing functions
//! - `error` - Coded error type shared by every layer
//! - `roster` - The in-memory ordered record store
//! - `storage` - JSON persistence gated by JSON Schema validation
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod roster;
pub mod storage;
