use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;


pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, RosterError>;

/// The unified error type for the roster application
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("[E{code:04}] Input error: {message}")]
    Input { code: u16, message: String },

    #[error("[E{code:04}] Usage error: {message}")]
    Usage { code: u16, message: String },

    #[error("[E{code:04}] Storage error: {message}")]
    Storage {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Schema error: {message}")]
    Schema {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Validation failed: {message}")]
    Validation {
        code: u16,
        message: String,
        violations: Vec<String>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl RosterError {
    /// Create an input error with specific code
    pub fn input(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
        }
    }

    /// A grade token that does not parse as an integer
    pub fn invalid_grade(token: &str) -> Self {
        Self::input(
            ErrorCode::INPUT_INVALID_GRADE,
            format!("invalid grade '{token}': grades must be whole numbers"),
        )
    }

    /// Create a usage error with specific code
    pub fn usage(code: u16, message: impl Into<String>) -> Self {
        Self::Usage {
            code,
            message: message.into(),
        }
    }

    /// A command that needs a filename was given none
    pub fn missing_argument(command: &str) -> Self {
        Self::usage(
            ErrorCode::USAGE_MISSING_ARGUMENT,
            format!("'{command}' requires a file name, usage: {command} <file>"),
        )
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::usage(
            ErrorCode::USAGE_UNKNOWN_COMMAND,
            format!("Unknown command {command}"),
        )
    }

    /// Create a storage error with specific code and path
    pub fn storage_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Storage {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a schema error with specific code and path
    pub fn schema_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Schema {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a validation error carrying every violation found
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_SCHEMA_VIOLATION,
            message: violations.join("; "),
            violations,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Storage { source: src, .. }
            | Self::Schema { source: src, .. }
            | Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Input { .. } | Self::Usage { .. } | Self::Validation { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Input { message, .. }
            | Self::Usage { message, .. }
            | Self::Storage { message, .. }
            | Self::Schema { message, .. }
            | Self::Validation { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Input { code, .. }
            | Self::Usage { code, .. }
            | Self::Storage { code, .. }
            | Self::Schema { code, .. }
            | Self::Validation { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } | Self::Usage { .. } => 2,
            Self::Storage { .. } => 3,
            Self::Schema { .. } => 4,
            Self::Validation { .. } => 5,
            Self::Config { .. } => 6,
        }
    }

    /// Whether the REPL can report this error and keep reading commands
    ///
    /// Only a broken terminal stream ends the session. Every other failure
    /// leaves the roster untouched and the prompt usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Input {
                code: ErrorCode::INPUT_TERMINAL,
                ..
            }
        )
    }

    /// Human-readable description of this error's code
    pub fn description(&self) -> &'static str {
        describe_error_code(self.code())
    }

    /// Whether this error came from schema validation, as opposed to I/O or parsing
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { message, .. } | Self::Usage { message, .. } => message.clone(),
            Self::Storage { message, path, .. } | Self::Schema { message, path, .. } => {
                match (path, self.source_message()) {
                    (Some(p), Some(src)) => format!("{} ({}): {}", message, p.display(), src),
                    (Some(p), None) => format!("{} ({})", message, p.display()),
                    (None, Some(src)) => format!("{}: {}", message, src),
                    (None, None) => message.clone(),
                }
            }
            Self::Validation { violations, .. } => violations.join("\n"),
            Self::Config { message, .. } => match self.source_message() {
                Some(src) => format!("Configuration problem: {}: {}", message, src),
                None => format!("Configuration problem: {}", message),
            },
        }
    }

    fn source_message(&self) -> Option<String> {
        std::error::Error::source(self).map(|e| e.to_string())
    }
}
