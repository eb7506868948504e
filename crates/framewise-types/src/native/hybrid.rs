//! Row/columnar hybrid engine dtypes

use crate::{ArrowDataType, TimeUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage backing a hybrid string dtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringStorage {
    Python,
    Arrow,
}

/// Hybrid engine dtype descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HybridDtype {
    // === Fixed-width numerics ===
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,

    // === Nullable extension types ===
    /// Masked integer, e.g. `Int64`
    NullableInt { bits: u8, signed: bool },
    /// Masked float, e.g. `Float64`
    NullableFloat { bits: u8 },
    /// Masked boolean
    NullableBool,

    Object,
    String { storage: StringStorage },
    Datetime {
        unit: TimeUnit,
        tz: Option<String>,
    },
    Timedelta(TimeUnit),

    /// Category dtype. A missing `ordered` flag is the engine's own
    /// "not ordered".
    Category {
        categories: Vec<String>,
        ordered: Option<bool>,
    },

    /// Column stored through the columnar in-memory format
    ArrowBacked(ArrowDataType),
}

impl HybridDtype {
    /// Create a category dtype
    pub fn category<I, S>(categories: I, ordered: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Category {
            categories: categories.into_iter().map(Into::into).collect(),
            ordered: Some(ordered),
        }
    }
}

impl fmt::Display for HybridDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int8 => f.write_str("int8"),
            Self::Int16 => f.write_str("int16"),
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::UInt8 => f.write_str("uint8"),
            Self::UInt16 => f.write_str("uint16"),
            Self::UInt32 => f.write_str("uint32"),
            Self::UInt64 => f.write_str("uint64"),
            Self::Float32 => f.write_str("float32"),
            Self::Float64 => f.write_str("float64"),
            Self::NullableInt { bits, signed } => {
                write!(f, "{}Int{bits}", if *signed { "" } else { "U" })
            }
            Self::NullableFloat { bits } => write!(f, "Float{bits}"),
            Self::NullableBool => f.write_str("boolean"),
            Self::Object => f.write_str("object"),
            Self::String { storage } => match storage {
                StringStorage::Python => f.write_str("string[python]"),
                StringStorage::Arrow => f.write_str("string[pyarrow]"),
            },
            Self::Datetime { unit, tz } => match tz {
                Some(tz) => write!(f, "datetime64[{}, {tz}]", unit.abbreviation()),
                None => write!(f, "datetime64[{}]", unit.abbreviation()),
            },
            Self::Timedelta(unit) => write!(f, "timedelta64[{}]", unit.abbreviation()),
            Self::Category { .. } => f.write_str("category"),
            Self::ArrowBacked(ty) => write!(f, "{ty}[pyarrow]"),
        }
    }
}
