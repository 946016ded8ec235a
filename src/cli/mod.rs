//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - The interactive read-eval-print loop
//! - Table rendering
//! - Help text

pub mod args;
pub mod display;
pub mod help;
pub mod repl;

// Re-export the main CLI structures for convenience
pub use args::Cli;
pub use display::{render_table, EMPTY_MESSAGE};
pub use help::{get_log_level, REPL_HELP};
pub use repl::{Command, Flow, Session};
