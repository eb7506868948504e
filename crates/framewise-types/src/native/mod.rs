//! Native backend dtype descriptors
//!
//! Each backend reports "what type is this column" in its own vocabulary.
//! These are read-only mirrors of those vocabularies; the normalizer
//! translates them onto the semantic model.

mod arrow;
mod eager;
mod hybrid;

pub use arrow::*;
pub use eager::*;
pub use hybrid::*;

use crate::BackendKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A native dtype tagged with the backend that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "backend", content = "dtype", rename_all = "lowercase")]
pub enum NativeDtype {
    Eager(EagerDtype),
    Hybrid(HybridDtype),
    Arrow(ArrowDataType),
}

impl NativeDtype {
    /// Get the backend this descriptor belongs to
    pub const fn backend(&self) -> BackendKind {
        match self {
            Self::Eager(_) => BackendKind::Eager,
            Self::Hybrid(_) => BackendKind::Hybrid,
            Self::Arrow(_) => BackendKind::Arrow,
        }
    }
}

impl From<EagerDtype> for NativeDtype {
    fn from(dtype: EagerDtype) -> Self {
        Self::Eager(dtype)
    }
}

impl From<HybridDtype> for NativeDtype {
    fn from(dtype: HybridDtype) -> Self {
        Self::Hybrid(dtype)
    }
}

impl From<ArrowDataType> for NativeDtype {
    fn from(dtype: ArrowDataType) -> Self {
        Self::Arrow(dtype)
    }
}

impl fmt::Display for NativeDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager(dtype) => write!(f, "{dtype}"),
            Self::Hybrid(dtype) => write!(f, "{dtype}"),
            Self::Arrow(dtype) => write!(f, "{dtype}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_tag() {
        assert_eq!(NativeDtype::from(EagerDtype::Int64).backend(), BackendKind::Eager);
        assert_eq!(
            NativeDtype::from(HybridDtype::ArrowBacked(ArrowDataType::Utf8)).backend(),
            BackendKind::Hybrid
        );
        assert_eq!(NativeDtype::from(ArrowDataType::Utf8).backend(), BackendKind::Arrow);
    }

    #[test]
    fn test_serde_adjacent_tagging() {
        let dtype = NativeDtype::from(EagerDtype::categorical());
        let json = serde_json::to_value(&dtype).unwrap();
        assert_eq!(json["backend"], "eager");
        let back: NativeDtype = serde_json::from_value(json).unwrap();
        assert_eq!(back, dtype);
    }
}
