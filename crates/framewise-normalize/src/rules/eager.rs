//! Eager engine rules

use framewise_types::{BackendKind, CategoricalOrdering, EagerDtype, OpaqueType, SemanticType};

pub fn normalize(dtype: &EagerDtype) -> SemanticType {
    match dtype {
        EagerDtype::Categorical { ordering } => SemanticType::categorical(match ordering {
            // Unordered form: categories carry no order
            None => false,
            Some(CategoricalOrdering::Physical) => true,
            // Compared by string value, not by category identity
            Some(CategoricalOrdering::Lexical) => false,
        }),
        // Category position defines the order
        EagerDtype::Enum { categories } => SemanticType::Enum {
            categories: categories.clone(),
        },
        other => SemanticType::other(OpaqueType::native(BackendKind::Eager, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_categorical_orderings() {
        assert_eq!(
            normalize(&EagerDtype::categorical()),
            SemanticType::categorical(false)
        );
        assert_eq!(
            normalize(&EagerDtype::categorical_with(CategoricalOrdering::Physical)),
            SemanticType::categorical(true)
        );
        assert_eq!(
            normalize(&EagerDtype::categorical_with(CategoricalOrdering::Lexical)),
            SemanticType::categorical(false)
        );
    }

    #[test]
    fn test_enum_keeps_categories() {
        assert_eq!(
            normalize(&EagerDtype::enumeration(["b", "a"])),
            SemanticType::enumeration(["b", "a"])
        );
    }

    #[test]
    fn test_nested_categorical_is_opaque() {
        let dtype = EagerDtype::List(Box::new(EagerDtype::categorical()));
        assert_eq!(
            normalize(&dtype),
            SemanticType::other(OpaqueType::native(BackendKind::Eager, "List(Categorical)"))
        );
    }
}
