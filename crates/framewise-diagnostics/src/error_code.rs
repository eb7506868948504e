//! framewise error codes following a structured numbering system
//!
//! Error code ranges:
//! - FW0001-FW0099: Column wrapping errors (missing or ambiguous sources)
//! - FW0100-FW0199: Capability errors (library versions, probes)
//! - FW0200-FW0299: Interchange protocol errors
//! - FW0400-FW0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a column wrapping error (0001-0099)
    pub const fn is_column_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a capability error (0100-0199)
    pub const fn is_capability_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an interchange protocol error (0200-0299)
    pub const fn is_interchange_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FW{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Column wrapping errors (0001-0099)
    map.insert(
        codes::DETACHED_COLUMN.0,
        ErrorInfo::new("Column has neither a native object nor an interchange view")
            .with_help("Attach a native dtype or an interchange column before building"),
    );
    map.insert(
        codes::AMBIGUOUS_COLUMN.0,
        ErrorInfo::new("Column has both a native object and an interchange view")
            .with_help("A column is wrapped in exactly one access mode"),
    );
    map.insert(codes::COLUMN_NOT_FOUND.0, ErrorInfo::new("Column not found"));
    map.insert(codes::DUPLICATE_COLUMN.0, ErrorInfo::new("Duplicate column name"));
    map.insert(
        codes::NAME_MISMATCH.0,
        ErrorInfo::new("Column name differs from the interchange column's name")
            .with_help("Build the column under the name its interchange view reports"),
    );

    // Capability errors (0100-0199)
    map.insert(codes::UNKNOWN_BACKEND.0, ErrorInfo::new("Unknown backend"));
    map.insert(codes::LIBRARY_NOT_INSTALLED.0, ErrorInfo::new("Library not installed"));
    map.insert(
        codes::INVALID_VERSION.0,
        ErrorInfo::new("Invalid library version")
            .with_help("Versions start with a numeric major component, e.g. 2.1.0"),
    );

    // Interchange errors (0200-0299)
    map.insert(codes::NOT_CATEGORICAL.0, ErrorInfo::new("Column is not categorical"));
    map.insert(codes::UNKNOWN_DTYPE_KIND.0, ErrorInfo::new("Unknown interchange dtype kind"));

    // System errors (0400-0499)
    map.insert(codes::IO_ERROR.0, ErrorInfo::new("I/O error"));
    map.insert(codes::INVALID_CONFIG.0, ErrorInfo::new("Invalid configuration"));

    map
});

/// Well-known error codes
pub mod codes {
    use super::ErrorCode;

    pub const DETACHED_COLUMN: ErrorCode = ErrorCode::new(1);
    pub const AMBIGUOUS_COLUMN: ErrorCode = ErrorCode::new(2);
    pub const COLUMN_NOT_FOUND: ErrorCode = ErrorCode::new(3);
    pub const DUPLICATE_COLUMN: ErrorCode = ErrorCode::new(4);
    pub const NAME_MISMATCH: ErrorCode = ErrorCode::new(5);

    pub const UNKNOWN_BACKEND: ErrorCode = ErrorCode::new(100);
    pub const LIBRARY_NOT_INSTALLED: ErrorCode = ErrorCode::new(101);
    pub const INVALID_VERSION: ErrorCode = ErrorCode::new(102);

    pub const NOT_CATEGORICAL: ErrorCode = ErrorCode::new(200);
    pub const UNKNOWN_DTYPE_KIND: ErrorCode = ErrorCode::new(201);

    pub const IO_ERROR: ErrorCode = ErrorCode::new(400);
    pub const INVALID_CONFIG: ErrorCode = ErrorCode::new(401);
}
