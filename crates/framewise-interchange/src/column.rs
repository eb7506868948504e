//! In-memory interchange columns and frames

use crate::{
    CategoricalDescription, DtypeKind, InterchangeColumn, InterchangeDtype, InterchangeFrame,
    Metadata,
};
use framewise_diagnostics::{FramewiseError, codes};
use framewise_types::Producer;
use std::sync::Arc;

/// An interchange column held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolColumn {
    name: String,
    dtype: InterchangeDtype,
    categorical: Option<CategoricalDescription>,
    metadata: Metadata,
    producer: Option<Producer>,
}

impl ProtocolColumn {
    /// Create a column with an arbitrary dtype
    pub fn new(name: impl Into<String>, dtype: InterchangeDtype) -> Self {
        Self {
            name: name.into(),
            dtype,
            categorical: None,
            metadata: Metadata::new(),
            producer: None,
        }
    }

    /// Create a 64-bit integer column
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, InterchangeDtype::int64())
    }

    /// Create a string column
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, InterchangeDtype::string())
    }

    /// Create a categorical column
    pub fn categorical(name: impl Into<String>, description: CategoricalDescription) -> Self {
        Self {
            categorical: Some(description),
            ..Self::new(name, InterchangeDtype::categorical())
        }
    }

    /// Set the producing library
    pub fn with_producer(mut self, producer: Producer) -> Self {
        self.producer = Some(producer);
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl InterchangeColumn for ProtocolColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn dtype(&self) -> InterchangeDtype {
        self.dtype.clone()
    }

    fn describe_categorical(&self) -> Result<CategoricalDescription, FramewiseError> {
        if self.dtype.kind != DtypeKind::Categorical {
            return Err(FramewiseError::interchange(
                codes::NOT_CATEGORICAL,
                format!("expected a categorical column, got {}", self.dtype.kind),
            )
            .with_column(self.name.clone()));
        }
        Ok(self
            .categorical
            .unwrap_or_else(CategoricalDescription::unreported))
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn producer(&self) -> Option<Producer> {
        self.producer
    }
}

/// An interchange frame held in memory
#[derive(Debug, Clone, Default)]
pub struct ProtocolFrame {
    columns: Vec<Arc<ProtocolColumn>>,
}

impl ProtocolFrame {
    pub fn new(columns: impl IntoIterator<Item = ProtocolColumn>) -> Self {
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl InterchangeFrame for ProtocolFrame {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    fn column_by_name(&self, name: &str) -> Result<Arc<dyn InterchangeColumn>, FramewiseError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| Arc::clone(c) as Arc<dyn InterchangeColumn>)
            .ok_or_else(|| FramewiseError::column_not_found(name))
    }
}
