//! Wrapped frames

use crate::Column;
use framewise_diagnostics::{FramewiseError, codes};
use framewise_interchange::InterchangeFrame;
use framewise_types::NativeDtype;
use indexmap::IndexMap;

/// Named columns, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: IndexMap<String, Column>,
}

impl Frame {
    /// Build a frame from native `(name, dtype)` pairs
    pub fn native<I, S, D>(columns: I) -> Result<Self, FramewiseError>
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<NativeDtype>,
    {
        let mut frame = Self::default();
        for (name, dtype) in columns {
            frame.insert(Column::native(name, dtype))?;
        }
        Ok(frame)
    }

    /// Build a protocol-only frame from an interchange view
    pub fn from_interchange(frame: &dyn InterchangeFrame) -> Result<Self, FramewiseError> {
        let mut out = Self::default();
        for name in frame.column_names() {
            let column = frame.column_by_name(&name)?;
            out.insert(Column::builder(name).interchange(column).build()?)?;
        }
        Ok(out)
    }

    /// Add a column; names are unique
    pub fn insert(&mut self, column: Column) -> Result<(), FramewiseError> {
        if self.columns.contains_key(column.name()) {
            return Err(FramewiseError::column(
                codes::DUPLICATE_COLUMN,
                format!("duplicate column name '{}'", column.name()),
            )
            .with_column(column.name()));
        }
        self.columns.insert(column.name().to_string(), column);
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column, FramewiseError> {
        self.columns
            .get(name)
            .ok_or_else(|| FramewiseError::column_not_found(name))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessMode;
    use framewise_interchange::{ProtocolColumn, ProtocolFrame};
    use framewise_types::{EagerDtype, HybridDtype};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_frame() {
        let frame = Frame::native([
            ("a", NativeDtype::from(EagerDtype::Int64)),
            ("b", NativeDtype::from(EagerDtype::categorical())),
        ])
        .unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(frame.column("b").unwrap().mode(), AccessMode::Native);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Frame::native([("a", HybridDtype::Int64), ("a", HybridDtype::Float64)]).unwrap_err();
        assert_eq!(err.code(), codes::DUPLICATE_COLUMN);
    }

    #[test]
    fn test_unknown_column() {
        let frame = Frame::native([("a", EagerDtype::Int64)]).unwrap();
        let err = frame.column("z").unwrap_err();
        assert_eq!(err.code(), codes::COLUMN_NOT_FOUND);
    }

    #[test]
    fn test_from_interchange() {
        let protocol = ProtocolFrame::new([ProtocolColumn::integer("a"), ProtocolColumn::string("b")]);
        let frame = Frame::from_interchange(&protocol).unwrap();
        assert_eq!(frame.len(), 2);
        assert!(frame.columns().all(|c| c.mode() == AccessMode::InterchangeOnly));
    }
}
