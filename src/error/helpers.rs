use super::{ErrorCode, RosterError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a storage error tagged with the file it concerns
    fn to_storage_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, RosterError>;

    /// Convert to a schema error tagged with the schema file
    fn to_schema_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, RosterError>;

    /// Convert to a configuration error
    fn to_config_error(self, code: u16, message: impl Into<String>) -> Result<T, RosterError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_storage_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, RosterError> {
        self.map_err(|e| {
            RosterError::storage_with_code(code, message, Some(path.to_path_buf())).with_source(e)
        })
    }

    fn to_schema_error(
        self,
        code: u16,
        message: impl Into<String>,
        path: &Path,
    ) -> Result<T, RosterError> {
        self.map_err(|e| {
            RosterError::schema_with_code(code, message, Some(path.to_path_buf())).with_source(e)
        })
    }

    fn to_config_error(self, code: u16, message: impl Into<String>) -> Result<T, RosterError> {
        self.map_err(|e| RosterError::config_with_code(code, message).with_source(e))
    }
}

/// Map an I/O failure on a data file to the matching storage code
pub fn io_storage_error(err: std::io::Error, action: &str, path: &Path) -> RosterError {
    let code = if err.kind() == std::io::ErrorKind::NotFound {
        ErrorCode::STORAGE_NOT_FOUND
    } else {
        ErrorCode::STORAGE_IO_ERROR
    };
    RosterError::storage_with_code(
        code,
        format!("Failed to {action} file"),
        Some(path.to_path_buf()),
    )
    .with_source(err)
}
