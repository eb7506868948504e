//! Per-backend normalization rule-sets
//!
//! Each module maps one backend's native dtype vocabulary onto the semantic
//! model. Every rule-set is total: dtypes outside the categorical family
//! become `SemanticType::Other`.

pub mod arrow;
pub mod eager;
pub mod hybrid;
