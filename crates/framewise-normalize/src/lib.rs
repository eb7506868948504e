//! Type normalization for wrapped columns
//!
//! This crate provides:
//! - `Column` / `Frame` wrappers that state whether a column is backed by a
//!   native object or only by an interchange view
//! - `TypeNormalizer`, translating native dtypes onto the semantic model with
//!   one rule-set per backend
//! - Type predicates such as [`is_ordered_categorical`]
//!
//! # Example
//!
//! ```
//! use framewise_normalize::{Column, is_ordered_categorical};
//! use framewise_types::{EagerDtype, HybridDtype};
//!
//! let column = Column::native("a", EagerDtype::enumeration(["a", "b"]));
//! assert!(is_ordered_categorical(&column));
//!
//! let column = Column::native("a", HybridDtype::category(["a", "b"], false));
//! assert!(!is_ordered_categorical(&column));
//! ```

pub mod column;
pub mod frame;
pub mod normalizer;
pub mod predicates;
mod rules;

pub use column::*;
pub use frame::*;
pub use normalizer::*;
pub use predicates::*;
