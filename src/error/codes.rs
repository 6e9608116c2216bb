/// Error code registry for edgecopy
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Record source/sink errors
/// - 4000-4999: Task execution errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;
    pub const CONFIG_UNSUPPORTED_DIRECTION: u16 = 1010;

    // Record source/sink errors (3000-3999)
    pub const IO_GENERIC: u16 = 3000;
    pub const IO_READ_FAILED: u16 = 3001;
    pub const IO_WRITE_FAILED: u16 = 3002;
    pub const IO_SERIALIZATION_ERROR: u16 = 3011;
    pub const IO_DESERIALIZATION_ERROR: u16 = 3012;

    // Task execution errors (4000-4999)
    pub const TASK_GENERIC: u16 = 4000;
    pub const TASK_PANICKED: u16 = 4001;
    pub const TASK_CANCELLED: u16 = 4006;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1005 => "Invalid value in configuration",
        1007 => "Failed to parse configuration",
        1010 => "Edge copy direction BOTH is not supported",

        3000 => "Generic record I/O error",
        3001 => "Failed to read vertex records",
        3002 => "Failed to write vertex records",
        3011 => "Failed to serialize vertex record",
        3012 => "Failed to deserialize vertex record",

        4000 => "Generic task error",
        4001 => "Task panicked",
        4006 => "Task was cancelled",

        _ => "Unknown error code",
    }
}
