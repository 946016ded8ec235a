//! Configuration management
//!
//! Settings are resolved in layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`roster.toml` in the working directory, or `--config`)
//! 3. `ROSTER_*` environment variables
//! 4. command-line flags, applied by the binary
//!
//! ```toml
//! schema_path = "schemas/student-schema.json"
//! average = "fixed-five"
//! prompt = "roster> "
//! ```


use crate::core::AverageMode;
use crate::error::{ErrorCode, ErrorExt, Result, RosterError};
use crate::storage::DEFAULT_SCHEMA_FILE;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

pub const ENV_SCHEMA: &str = "ROSTER_SCHEMA";
pub const ENV_AVERAGE: &str = "ROSTER_AVERAGE";
pub const ENV_PROMPT: &str = "ROSTER_PROMPT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// JSON Schema used to validate files on `load`
    pub schema_path: PathBuf,
    /// Sort-key policy for `add`
    pub average: AverageMode,
    /// REPL prompt
    pub prompt: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILE),
            average: AverageMode::default(),
            prompt: ">>> ".to_string(),
        }
    }
}

impl RosterConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).to_config_error(
            ErrorCode::CONFIG_PARSE_ERROR,
            "Failed to parse configuration",
        )
    }

    /// Read configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_GENERIC
            };
            RosterError::config_with_code(
                code,
                format!("Failed to read config file {}", path.display()),
            )
            .with_source(e)
        })?;

        Self::from_toml_str(&content).map_err(|e| e.with_context(path.display()))
    }

    /// Resolve file and environment layers.
    ///
    /// An explicit path must exist; the implicit `roster.toml` is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load_from(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_env_vars()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Apply `ROSTER_*` variables from the process environment.
    ///
    /// Only the known keys are read, so unrelated non-Unicode variables are
    /// never inspected. The schema path may itself be non-Unicode.
    pub fn merge_env_vars(&mut self) -> Result<()> {
        if let Some(schema) = env::var_os(ENV_SCHEMA) {
            self.schema_path = PathBuf::from(schema);
        }

        let mut vars = Vec::new();
        for key in [ENV_AVERAGE, ENV_PROMPT] {
            match env::var(key) {
                Ok(value) => vars.push((key.to_string(), value)),
                Err(VarError::NotPresent) => {}
                Err(e @ VarError::NotUnicode(_)) => {
                    return Err(RosterError::config_with_code(
                        ErrorCode::CONFIG_INVALID_VALUE,
                        key,
                    )
                    .with_source(e));
                }
            }
        }
        self.merge_env(vars)
    }

    /// Apply `ROSTER_*` variables from any key/value source
    pub fn merge_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                ENV_SCHEMA => self.schema_path = PathBuf::from(value),
                ENV_AVERAGE => {
                    self.average = value.parse::<AverageMode>().map_err(|msg| {
                        RosterError::config_with_code(
                            ErrorCode::CONFIG_INVALID_VALUE,
                            format!("{ENV_AVERAGE}: {msg}"),
                        )
                    })?;
                }
                ENV_PROMPT => self.prompt = value,
                _ => {}
            }
        }
        Ok(())
    }
}
