//! framewise error types

use crate::{ErrorCode, codes};
use thiserror::Error;

/// Main framewise error type
///
/// Errors only arise at library boundaries (column wrapping, configuration,
/// version parsing). Type normalization itself is total.
#[derive(Debug, Clone, Error)]
pub enum FramewiseError {
    /// Column wrapping error (missing/ambiguous source, unknown column)
    #[error("{code}: {message}")]
    Column {
        code: ErrorCode,
        message: String,
        column: Option<String>,
    },

    /// Capability error (library version, backend lookup)
    #[error("{code}: {message}")]
    Capability { code: ErrorCode, message: String },

    /// Interchange protocol error
    #[error("{code}: {message}")]
    Interchange {
        code: ErrorCode,
        message: String,
        column: Option<String>,
    },

    /// Configuration or I/O error
    #[error("{code}: {message}")]
    Config {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl FramewiseError {
    /// Create a column wrapping error
    pub fn column(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Column {
            code,
            message: message.into(),
            column: None,
        }
    }

    /// Create a capability error
    pub fn capability(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Capability {
            code,
            message: message.into(),
        }
    }

    /// Create an interchange error
    pub fn interchange(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Interchange {
            code,
            message: message.into(),
            column: None,
        }
    }

    /// Create a configuration error
    pub fn config(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Column named `name` does not exist
    pub fn column_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Column {
            code: codes::COLUMN_NOT_FOUND,
            message: format!("no column named '{name}'"),
            column: Some(name),
        }
    }

    /// Version string could not be parsed
    pub fn invalid_version(version: &str) -> Self {
        Self::capability(
            codes::INVALID_VERSION,
            format!("cannot parse library version '{version}'"),
        )
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Column { code, .. }
            | Self::Capability { code, .. }
            | Self::Interchange { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::Column { message, .. }
            | Self::Capability { message, .. }
            | Self::Interchange { message, .. }
            | Self::Config { message, .. } => message,
        }
    }

    /// Attach the name of the column the error concerns
    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Self::Column { column, .. } | Self::Interchange { column, .. } => {
                *column = Some(name.into());
            }
            Self::Capability { .. } | Self::Config { .. } => {}
        }
        self
    }

    /// Attach context (e.g. a file path) to a configuration error
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        if let Self::Config { context, .. } = &mut self {
            *context = Some(ctx.into());
        }
        self
    }
}
