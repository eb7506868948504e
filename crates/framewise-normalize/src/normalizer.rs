//! Type normalizer
//!
//! Translates a wrapped column into exactly one semantic type. Native
//! columns are dispatched to their backend's rule-set; protocol-only columns
//! are routed to the interchange fallback. The capability descriptor is
//! injected, so results depend only on the column and the descriptor.

use crate::{Column, ColumnSource, rules};
use framewise_interchange::{FallbackAdapter, InterchangeColumn};
use framewise_types::{Capabilities, FramewiseConfig, NativeDtype, SemanticType};

/// Maps columns onto the semantic type model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNormalizer {
    capabilities: Capabilities,
}

impl TypeNormalizer {
    /// Create a normalizer with explicit capabilities
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    /// Create a normalizer from loaded configuration
    pub fn from_config(config: &FramewiseConfig) -> Self {
        Self::new(config.capabilities())
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Normalize a native dtype with its backend's rule-set
    pub fn normalize_native(&self, dtype: &NativeDtype) -> SemanticType {
        log::trace!("normalizing {} dtype {dtype}", dtype.backend());
        match dtype {
            NativeDtype::Eager(dtype) => rules::eager::normalize(dtype),
            NativeDtype::Hybrid(dtype) => rules::hybrid::normalize(dtype, &self.capabilities),
            NativeDtype::Arrow(dtype) => rules::arrow::normalize(dtype, &self.capabilities),
        }
    }

    /// Normalize a protocol-only column
    pub fn normalize_interchange(&self, column: &dyn InterchangeColumn) -> SemanticType {
        FallbackAdapter::new(&self.capabilities).normalize(column)
    }

    /// Compute the semantic type of a column
    pub fn semantic_type(&self, column: &Column) -> SemanticType {
        match column.source() {
            ColumnSource::Native(dtype) => self.normalize_native(dtype),
            ColumnSource::Interchange(protocol) => self.normalize_interchange(protocol.as_ref()),
        }
    }

    /// Check if a column is a categorical whose order is significant
    pub fn is_ordered_categorical(&self, column: &Column) -> bool {
        crate::predicates::ordered_categorical(&self.semantic_type(column))
    }

    /// Check if a column belongs to the categorical family
    pub fn is_categorical(&self, column: &Column) -> bool {
        self.semantic_type(column).is_categorical()
    }
}
