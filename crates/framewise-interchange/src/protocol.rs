//! Interchange protocol surface
//!
//! A minimal, library-agnostic column descriptor: a column name, a generic
//! dtype enum, a categorical description and backend-defined metadata. No
//! category lists are exposed, so anything derived from this view is
//! strictly less precise than a native descriptor.

use framewise_diagnostics::{FramewiseError, codes};
use framewise_types::Producer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol dtype kinds, with their numeric protocol codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DtypeKind {
    Int = 0,
    UInt = 1,
    Float = 2,
    Bool = 20,
    String = 21,
    Datetime = 22,
    Categorical = 23,
}

impl DtypeKind {
    /// Look up a kind by its protocol code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Int),
            1 => Some(Self::UInt),
            2 => Some(Self::Float),
            20 => Some(Self::Bool),
            21 => Some(Self::String),
            22 => Some(Self::Datetime),
            23 => Some(Self::Categorical),
            _ => None,
        }
    }

    /// Get the protocol code
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::UInt => "UINT",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::String => "STRING",
            Self::Datetime => "DATETIME",
            Self::Categorical => "CATEGORICAL",
        }
    }
}

impl TryFrom<u8> for DtypeKind {
    type Error = FramewiseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| {
            FramewiseError::interchange(
                codes::UNKNOWN_DTYPE_KIND,
                format!("unknown interchange dtype kind {code}"),
            )
        })
    }
}

impl fmt::Display for DtypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of a column buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    Little,
    Big,
    Native,
    NotApplicable,
}

impl Endianness {
    /// Protocol character for this byte order
    pub const fn symbol(self) -> char {
        match self {
            Self::Little => '<',
            Self::Big => '>',
            Self::Native => '=',
            Self::NotApplicable => '|',
        }
    }
}

/// Protocol dtype: `(kind, bit-width, format string, endianness)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterchangeDtype {
    pub kind: DtypeKind,
    pub bit_width: u16,
    /// Arrow C data interface format string
    pub format: String,
    pub endianness: Endianness,
}

impl InterchangeDtype {
    pub fn new(
        kind: DtypeKind,
        bit_width: u16,
        format: impl Into<String>,
        endianness: Endianness,
    ) -> Self {
        Self {
            kind,
            bit_width,
            format: format.into(),
            endianness,
        }
    }

    /// Build from a raw protocol tuple
    pub fn from_parts(
        code: u8,
        bit_width: u16,
        format: impl Into<String>,
        endianness: Endianness,
    ) -> Result<Self, FramewiseError> {
        Ok(Self::new(DtypeKind::try_from(code)?, bit_width, format, endianness))
    }

    pub fn int64() -> Self {
        Self::new(DtypeKind::Int, 64, "l", Endianness::Native)
    }

    pub fn string() -> Self {
        Self::new(DtypeKind::String, 8, "u", Endianness::Native)
    }

    /// Categorical with 8-bit codes
    pub fn categorical() -> Self {
        Self::new(DtypeKind::Categorical, 8, "c", Endianness::Native)
    }
}

impl fmt::Display for InterchangeDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {:?}, {})",
            self.kind,
            self.bit_width,
            self.format,
            self.endianness.symbol()
        )
    }
}

/// What a producer reports about a categorical column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CategoricalDescription {
    /// `None` when the producer does not populate the key
    pub is_ordered: Option<bool>,
    /// Whether the categories are stored as a dictionary
    pub is_dictionary: bool,
}

impl CategoricalDescription {
    pub const fn ordered(is_ordered: bool) -> Self {
        Self {
            is_ordered: Some(is_ordered),
            is_dictionary: true,
        }
    }

    pub const fn unreported() -> Self {
        Self {
            is_ordered: None,
            is_dictionary: true,
        }
    }
}

/// Backend-defined extra metadata of a column
pub type Metadata = IndexMap<String, serde_json::Value>;

/// A protocol-only view of one column
pub trait InterchangeColumn: Send + Sync {
    /// Column name
    fn name(&self) -> &str;

    /// Generic protocol dtype
    fn dtype(&self) -> InterchangeDtype;

    /// Categorical description; fails for non-categorical columns
    fn describe_categorical(&self) -> Result<CategoricalDescription, FramewiseError>;

    /// Backend-defined metadata
    fn metadata(&self) -> &Metadata;

    /// The library that produced this view, when known
    fn producer(&self) -> Option<Producer>;
}

/// A protocol-only view of a whole frame
pub trait InterchangeFrame {
    /// Column names, in order
    fn column_names(&self) -> Vec<String>;

    /// Look up one column
    fn column_by_name(
        &self,
        name: &str,
    ) -> Result<std::sync::Arc<dyn InterchangeColumn>, FramewiseError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DtypeKind::Int)]
    #[case(DtypeKind::UInt)]
    #[case(DtypeKind::Float)]
    #[case(DtypeKind::Bool)]
    #[case(DtypeKind::String)]
    #[case(DtypeKind::Datetime)]
    #[case(DtypeKind::Categorical)]
    fn test_kind_codes(#[case] kind: DtypeKind) {
        assert_eq!(DtypeKind::from_code(kind.code()), Some(kind));
    }

    #[test]
    fn test_categorical_code() {
        assert_eq!(DtypeKind::Categorical.code(), 23);
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(DtypeKind::from_code(3), None);
        let err = InterchangeDtype::from_parts(99, 8, "c", Endianness::Native).unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_DTYPE_KIND);
    }

    #[test]
    fn test_dtype_display() {
        assert_eq!(InterchangeDtype::int64().to_string(), "(INT, 64, \"l\", =)");
    }
}
