/// Error code registry for roster
///
/// Error codes are organized by category:
/// - 1000-1999: Input errors
/// - 2000-2999: Usage errors
/// - 3000-3999: Storage errors
/// - 4000-4999: Schema errors
/// - 5000-5999: Validation errors
/// - 6000-6999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const INPUT_INVALID_GRADE: u16 = 1001;
    pub const INPUT_NO_GRADES: u16 = 1002;
    pub const INPUT_CLOSED: u16 = 1003;
    pub const INPUT_TERMINAL: u16 = 1004;

    // Usage errors (2000-2999)
    pub const USAGE_MISSING_ARGUMENT: u16 = 2001;
    pub const USAGE_UNKNOWN_COMMAND: u16 = 2002;

    // Storage errors (3000-3999)
    pub const STORAGE_IO_ERROR: u16 = 3001;
    pub const STORAGE_NOT_FOUND: u16 = 3002;
    pub const STORAGE_MALFORMED_JSON: u16 = 3003;
    pub const STORAGE_SERIALIZATION_ERROR: u16 = 3004;

    // Schema errors (4000-4999)
    pub const SCHEMA_GENERIC: u16 = 4000;
    pub const SCHEMA_NOT_FOUND: u16 = 4001;
    pub const SCHEMA_MALFORMED: u16 = 4002;
    pub const SCHEMA_UNCOMPILABLE: u16 = 4003;

    // Validation errors (5000-5999)
    pub const VALIDATION_SCHEMA_VIOLATION: u16 = 5001;
    pub const VALIDATION_RECORD_SHAPE: u16 = 5002;

    // Configuration errors (6000-6999)
    pub const CONFIG_GENERIC: u16 = 6000;
    pub const CONFIG_NOT_FOUND: u16 = 6001;
    pub const CONFIG_PARSE_ERROR: u16 = 6002;
    pub const CONFIG_INVALID_VALUE: u16 = 6003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Grade is not an integer",
        1002 => "No grades entered",
        1003 => "Input closed before the record was complete",
        1004 => "Terminal I/O failed",

        2001 => "Command argument is missing",
        2002 => "Unknown command",

        3001 => "File I/O failed",
        3002 => "File not found",
        3003 => "File is not valid JSON",
        3004 => "Records could not be serialized",

        4000 => "Generic schema error",
        4001 => "Schema file not found",
        4002 => "Schema file is not valid JSON",
        4003 => "Schema document is not a valid JSON Schema",

        5001 => "Document violates the student schema",
        5002 => "Document does not describe student records",

        6000 => "Generic configuration error",
        6001 => "Configuration file not found",
        6002 => "Configuration file could not be parsed",
        6003 => "Configuration value is invalid",

        _ => "Unknown error code",
    }
}
