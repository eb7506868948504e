//! Eager columnar engine dtypes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time resolution shared by temporal dtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
}

impl TimeUnit {
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
        }
    }
}

/// How an eager categorical compares its values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoricalOrdering {
    /// By position in the category encoding
    Physical,
    /// By the string value of each category
    Lexical,
}

/// Eager engine dtype descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EagerDtype {
    Boolean,
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
    Decimal { precision: Option<u8>, scale: u8 },
    String,
    Binary,
    Date,
    Datetime {
        unit: TimeUnit,
        time_zone: Option<String>,
    },
    Duration(TimeUnit),
    Time,
    Null,
    Object,
    List(Box<EagerDtype>),
    Array { inner: Box<EagerDtype>, width: usize },
    Struct(Vec<(String, EagerDtype)>),
    /// Category type; `None` is the unordered form
    Categorical { ordering: Option<CategoricalOrdering> },
    /// Closed category set fixed at definition time
    Enum { categories: Vec<String> },
}

impl EagerDtype {
    /// Create an unordered categorical
    pub fn categorical() -> Self {
        Self::Categorical { ordering: None }
    }

    /// Create a categorical with an explicit ordering
    pub fn categorical_with(ordering: CategoricalOrdering) -> Self {
        Self::Categorical {
            ordering: Some(ordering),
        }
    }

    /// Create an enum over the given categories
    pub fn enumeration<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the engine's own name for this dtype, without parameters
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Decimal { .. } => "Decimal",
            Self::String => "String",
            Self::Binary => "Binary",
            Self::Date => "Date",
            Self::Datetime { .. } => "Datetime",
            Self::Duration(_) => "Duration",
            Self::Time => "Time",
            Self::Null => "Null",
            Self::Object => "Object",
            Self::List(_) => "List",
            Self::Array { .. } => "Array",
            Self::Struct(_) => "Struct",
            Self::Categorical { .. } => "Categorical",
            Self::Enum { .. } => "Enum",
        }
    }
}

impl fmt::Display for EagerDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal { precision, scale } => match precision {
                Some(p) => write!(f, "Decimal({p}, {scale})"),
                None => write!(f, "Decimal(None, {scale})"),
            },
            Self::Datetime { unit, time_zone } => match time_zone {
                Some(tz) => write!(f, "Datetime({}, {tz})", unit.abbreviation()),
                None => write!(f, "Datetime({})", unit.abbreviation()),
            },
            Self::Duration(unit) => write!(f, "Duration({})", unit.abbreviation()),
            Self::List(inner) => write!(f, "List({inner})"),
            Self::Array { inner, width } => write!(f, "Array({inner}, {width})"),
            Self::Struct(fields) => {
                write!(f, "Struct(")?;
                for (i, (name, dtype)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {dtype}")?;
                }
                write!(f, ")")
            }
            Self::Categorical {
                ordering: Some(ordering),
            } => {
                let ordering = match ordering {
                    CategoricalOrdering::Physical => "physical",
                    CategoricalOrdering::Lexical => "lexical",
                };
                write!(f, "Categorical(ordering={ordering})")
            }
            Self::Enum { categories } => write!(f, "Enum({})", categories.join(", ")),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EagerDtype::Int64.to_string(), "Int64");
        assert_eq!(EagerDtype::categorical().to_string(), "Categorical");
        assert_eq!(
            EagerDtype::categorical_with(CategoricalOrdering::Lexical).to_string(),
            "Categorical(ordering=lexical)"
        );
        assert_eq!(EagerDtype::enumeration(["a", "b"]).to_string(), "Enum(a, b)");
        assert_eq!(
            EagerDtype::List(Box::new(EagerDtype::String)).to_string(),
            "List(String)"
        );
        assert_eq!(
            EagerDtype::Datetime {
                unit: TimeUnit::Microseconds,
                time_zone: Some("UTC".into()),
            }
            .to_string(),
            "Datetime(us, UTC)"
        );
    }
}
