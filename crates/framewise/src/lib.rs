//! Backend-agnostic type normalization for dataframe columns
//!
//! framewise answers type-level questions about a column identically no
//! matter which engine produced it, including when only an interchange
//! protocol view of the column is available:
//! - A semantic type model shared by every backend
//! - One normalization rule-set per backend
//! - A protocol-only fallback for columns without a native object
//! - Total type predicates such as [`is_ordered_categorical`]
//!
//! # Example
//!
//! ```
//! use framewise::{Column, HybridDtype, is_ordered_categorical};
//!
//! let column = Column::native("grade", HybridDtype::category(["low", "high"], true));
//! assert!(is_ordered_categorical(&column));
//! ```

// Re-export all public APIs from internal crates
pub use framewise_diagnostics as diagnostics;
pub use framewise_interchange as interchange;
pub use framewise_normalize as normalize;
pub use framewise_types as types;

// Convenience re-exports
pub use framewise_diagnostics::{FramewiseError, Result};
pub use framewise_normalize::{
    AccessMode, Column, ColumnBuilder, Frame, TypeNormalizer, is_categorical,
    is_ordered_categorical, semantic_type,
};
pub use framewise_types::{
    ArrowDataType, BackendKind, Capabilities, EagerDtype, FramewiseConfig, HybridDtype,
    LibraryVersion, NativeDtype, OrderFlag, SemanticType,
};
