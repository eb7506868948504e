//! Wrapped columns

use framewise_diagnostics::{FramewiseError, codes};
use framewise_interchange::InterchangeColumn;
use framewise_types::{BackendKind, NativeDtype};
use std::fmt;
use std::sync::Arc;

/// What a column is backed by
#[derive(Clone)]
pub enum ColumnSource {
    /// A native backend object, described by its dtype
    Native(NativeDtype),
    /// Only a protocol-level interchange view
    Interchange(Arc<dyn InterchangeColumn>),
}

impl fmt::Debug for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(dtype) => f.debug_tuple("Native").field(dtype).finish(),
            Self::Interchange(column) => f
                .debug_tuple("Interchange")
                .field(&column.dtype())
                .finish(),
        }
    }
}

/// How type information can be read from a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Native,
    InterchangeOnly,
}

/// A named column in exactly one access mode
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    source: ColumnSource,
}

impl Column {
    /// Wrap a native column
    pub fn native(name: impl Into<String>, dtype: impl Into<NativeDtype>) -> Self {
        Self {
            name: name.into(),
            source: ColumnSource::Native(dtype.into()),
        }
    }

    /// Wrap a protocol-only column, taking the name it reports
    pub fn interchange(column: Arc<dyn InterchangeColumn>) -> Self {
        Self {
            name: column.name().to_string(),
            source: ColumnSource::Interchange(column),
        }
    }

    /// Start building a column from optional sources
    pub fn builder(name: impl Into<String>) -> ColumnBuilder {
        ColumnBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &ColumnSource {
        &self.source
    }

    pub fn mode(&self) -> AccessMode {
        match self.source {
            ColumnSource::Native(_) => AccessMode::Native,
            ColumnSource::Interchange(_) => AccessMode::InterchangeOnly,
        }
    }

    /// Get the native dtype, if a native object is attached
    pub fn native_dtype(&self) -> Option<&NativeDtype> {
        match &self.source {
            ColumnSource::Native(dtype) => Some(dtype),
            ColumnSource::Interchange(_) => None,
        }
    }

    /// Get the backend that owns the data, when it is known
    pub fn backend(&self) -> Option<BackendKind> {
        match &self.source {
            ColumnSource::Native(dtype) => Some(dtype.backend()),
            ColumnSource::Interchange(column) => column.producer().map(|p| p.backend),
        }
    }
}

/// Builds a `Column`, rejecting missing or ambiguous sources
#[derive(Default)]
pub struct ColumnBuilder {
    name: String,
    native: Option<NativeDtype>,
    interchange: Option<Arc<dyn InterchangeColumn>>,
}

impl ColumnBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach a native dtype
    pub fn native(mut self, dtype: impl Into<NativeDtype>) -> Self {
        self.native = Some(dtype.into());
        self
    }

    /// Attach an interchange view
    pub fn interchange(mut self, column: Arc<dyn InterchangeColumn>) -> Self {
        self.interchange = Some(column);
        self
    }

    /// Build the column
    ///
    /// An attached interchange view must report the builder's name.
    pub fn build(self) -> Result<Column, FramewiseError> {
        let source = match (self.native, self.interchange) {
            (Some(dtype), None) => ColumnSource::Native(dtype),
            (None, Some(column)) if column.name() != self.name => {
                return Err(FramewiseError::column(
                    codes::NAME_MISMATCH,
                    format!("interchange view reports name `{}`", column.name()),
                )
                .with_column(self.name));
            }
            (None, Some(column)) => ColumnSource::Interchange(column),
            (None, None) => {
                return Err(FramewiseError::column(
                    codes::DETACHED_COLUMN,
                    "column has neither a native object nor an interchange view",
                )
                .with_column(self.name));
            }
            (Some(_), Some(_)) => {
                return Err(FramewiseError::column(
                    codes::AMBIGUOUS_COLUMN,
                    "column has both a native object and an interchange view",
                )
                .with_column(self.name));
            }
        };
        Ok(Column {
            name: self.name,
            source,
        })
    }
}
