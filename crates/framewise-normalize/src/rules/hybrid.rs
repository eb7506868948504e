//! Hybrid engine rules

use super::arrow;
use framewise_types::{BackendKind, Capabilities, HybridDtype, OpaqueType, SemanticType};

pub fn normalize(dtype: &HybridDtype, capabilities: &Capabilities) -> SemanticType {
    match dtype {
        HybridDtype::Category { ordered, .. } => SemanticType::categorical(ordered.unwrap_or(false)),
        // Dictionary storage follows the columnar format's rules
        HybridDtype::ArrowBacked(inner) if inner.is_dictionary() => arrow::normalize(inner, capabilities),
        other => SemanticType::other(OpaqueType::native(BackendKind::Hybrid, other.to_string())),
    }
}
