//! Columnar in-memory format data types

use crate::TimeUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrow-style logical data type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowDataType {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Utf8,
    LargeUtf8,
    Binary,
    Date32,
    Date64,
    Timestamp {
        unit: TimeUnit,
        time_zone: Option<String>,
    },
    List(Box<ArrowDataType>),
    Struct(Vec<(String, ArrowDataType)>),
    /// Values stored as indices into a dictionary of distinct entries.
    ///
    /// `ordered` is the flag the array was constructed with. Whether it can
    /// be read back depends on the installed library version.
    Dictionary {
        index: Box<ArrowDataType>,
        value: Box<ArrowDataType>,
        ordered: bool,
    },
}

impl ArrowDataType {
    /// Create a dictionary type
    pub fn dictionary(index: ArrowDataType, value: ArrowDataType, ordered: bool) -> Self {
        Self::Dictionary {
            index: Box::new(index),
            value: Box::new(value),
            ordered,
        }
    }

    /// Check if this is a dictionary type
    pub fn is_dictionary(&self) -> bool {
        matches!(self, Self::Dictionary { .. })
    }

    /// Get the format's own name for this type, without parameters
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float16 => "halffloat",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Utf8 => "string",
            Self::LargeUtf8 => "large_string",
            Self::Binary => "binary",
            Self::Date32 => "date32",
            Self::Date64 => "date64",
            Self::Timestamp { .. } => "timestamp",
            Self::List(_) => "list",
            Self::Struct(_) => "struct",
            Self::Dictionary { .. } => "dictionary",
        }
    }
}

impl fmt::Display for ArrowDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp { unit, time_zone } => match time_zone {
                Some(tz) => write!(f, "timestamp[{}, tz={tz}]", unit.abbreviation()),
                None => write!(f, "timestamp[{}]", unit.abbreviation()),
            },
            Self::List(inner) => write!(f, "list<item: {inner}>"),
            Self::Struct(fields) => {
                write!(f, "struct<")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {ty}")?;
                }
                write!(f, ">")
            }
            Self::Dictionary {
                index,
                value,
                ordered,
            } => write!(
                f,
                "dictionary<values={value}, indices={index}, ordered={}>",
                u8::from(*ordered)
            ),
            other => f.write_str(other.name()),
        }
    }
}
