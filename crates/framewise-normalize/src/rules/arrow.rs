//! Columnar format rules
//!
//! Some format versions accept an `ordered` flag when a dictionary array is
//! built but drop it on introspection. The flag is only trusted when the
//! capability descriptor says it survives; otherwise the order is reported
//! as unsupported, never inferred from how the array was constructed.

use framewise_types::{ArrowDataType, BackendKind, Capabilities, OpaqueType, OrderFlag, SemanticType};

pub fn normalize(dtype: &ArrowDataType, capabilities: &Capabilities) -> SemanticType {
    match dtype {
        ArrowDataType::Dictionary { ordered, .. } => {
            SemanticType::dictionary(dictionary_order(*ordered, capabilities))
        }
        other => SemanticType::other(OpaqueType::native(BackendKind::Arrow, other.to_string())),
    }
}

/// Order flag of a dictionary type, gated on introspection support
pub fn dictionary_order(ordered: bool, capabilities: &Capabilities) -> OrderFlag {
    if capabilities.arrow_dictionary_ordered {
        OrderFlag::Declared(ordered)
    } else {
        log::debug!("dictionary order flag is not introspectable; reporting unsupported");
        OrderFlag::Unsupported
    }
}
