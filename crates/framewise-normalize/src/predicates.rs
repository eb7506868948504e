//! Type predicates
//!
//! Total, side-effect-free checks over the semantic type of a column. The
//! free functions use a normalizer with conservative default capabilities;
//! use the methods on [`TypeNormalizer`] to inject different capabilities.

use crate::{Column, TypeNormalizer};
use framewise_types::SemanticType;

/// Check if a column is a categorical whose category order is significant
///
/// `false` for every non-categorical column, and for dictionary-encoded
/// columns whose order flag cannot be introspected.
pub fn is_ordered_categorical(column: &Column) -> bool {
    TypeNormalizer::default().is_ordered_categorical(column)
}

/// Check if a column belongs to the categorical family
pub fn is_categorical(column: &Column) -> bool {
    TypeNormalizer::default().is_categorical(column)
}

/// Compute the semantic type of a column
pub fn semantic_type(column: &Column) -> SemanticType {
    TypeNormalizer::default().semantic_type(column)
}

/// Ordered-categorical test over an already computed semantic type
pub fn ordered_categorical(ty: &SemanticType) -> bool {
    ty.is_ordered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use framewise_interchange::{CategoricalDescription, ProtocolColumn};
    use framewise_types::{
        ArrowDataType, BackendKind, EagerDtype, HybridDtype, LibraryVersion, NativeDtype,
        OpaqueType, OrderFlag, Producer,
    };
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_ordered_categorical_over_model() {
        assert!(ordered_categorical(&SemanticType::categorical(true)));
        assert!(!ordered_categorical(&SemanticType::categorical(false)));
        assert!(ordered_categorical(&SemanticType::enumeration(["x"])));
        assert!(ordered_categorical(&SemanticType::dictionary(OrderFlag::Declared(true))));
        assert!(!ordered_categorical(&SemanticType::dictionary(OrderFlag::Declared(false))));
        assert!(!ordered_categorical(&SemanticType::dictionary(OrderFlag::Unsupported)));
        assert!(!ordered_categorical(&SemanticType::other(OpaqueType::native(
            BackendKind::Eager,
            "Int64"
        ))));
    }

    fn non_categorical() -> impl Strategy<Value = NativeDtype> {
        prop_oneof![
            Just(NativeDtype::from(EagerDtype::Int8)),
            Just(NativeDtype::from(EagerDtype::Int64)),
            Just(NativeDtype::from(EagerDtype::UInt32)),
            Just(NativeDtype::from(EagerDtype::Float64)),
            Just(NativeDtype::from(EagerDtype::String)),
            Just(NativeDtype::from(HybridDtype::Int64)),
            Just(NativeDtype::from(HybridDtype::Object)),
            Just(NativeDtype::from(HybridDtype::NullableInt { bits: 32, signed: true })),
            Just(NativeDtype::from(HybridDtype::ArrowBacked(ArrowDataType::Utf8))),
            Just(NativeDtype::from(ArrowDataType::Int64)),
        ]
    }

    fn any_dtype() -> impl Strategy<Value = NativeDtype> {
        let categories = || prop::collection::vec("[a-z]{1,4}", 0..5);
        prop_oneof![
            non_categorical(),
            categories().prop_map(|c| NativeDtype::from(EagerDtype::enumeration(c))),
            (categories(), any::<bool>())
                .prop_map(|(c, o)| NativeDtype::from(HybridDtype::category(c, o))),
            any::<bool>().prop_map(|o| NativeDtype::from(ArrowDataType::dictionary(
                ArrowDataType::Int32,
                ArrowDataType::Utf8,
                o
            ))),
            Just(NativeDtype::from(EagerDtype::categorical())),
        ]
    }

    fn any_producer() -> impl Strategy<Value = Option<Producer>> {
        let backend = prop_oneof![
            Just(BackendKind::Eager),
            Just(BackendKind::Hybrid),
            Just(BackendKind::Arrow),
        ];
        proptest::option::of((backend, 0u32..20, 0u32..30, 0u32..5).prop_map(
            |(backend, major, minor, patch)| {
                Producer::new(backend, LibraryVersion::new(major, minor, patch))
            },
        ))
    }

    fn interchange_column() -> impl Strategy<Value = Column> {
        (any::<Option<bool>>(), any::<bool>(), any_producer()).prop_map(
            |(is_ordered, is_dictionary, producer)| {
                let description = CategoricalDescription {
                    is_ordered,
                    is_dictionary,
                };
                let protocol = ProtocolColumn::categorical("a", description);
                let protocol = match producer {
                    Some(producer) => protocol.with_producer(producer),
                    None => protocol,
                };
                Column::interchange(Arc::new(protocol))
            },
        )
    }

    proptest! {
        #[test]
        fn prop_non_categorical_is_never_ordered(dtype in non_categorical()) {
            let column = Column::native("a", dtype);
            prop_assert!(!is_ordered_categorical(&column));
            prop_assert!(!is_categorical(&column));
        }

        #[test]
        fn prop_deterministic(dtype in any_dtype()) {
            let column = Column::native("a", dtype);
            let first = is_ordered_categorical(&column);
            for _ in 0..3 {
                prop_assert_eq!(is_ordered_categorical(&column), first);
            }
            prop_assert_eq!(semantic_type(&column), semantic_type(&column));
        }

        #[test]
        fn prop_interchange_deterministic(column in interchange_column()) {
            let first = is_ordered_categorical(&column);
            for _ in 0..3 {
                prop_assert_eq!(is_ordered_categorical(&column), first);
            }
            prop_assert_eq!(semantic_type(&column), semantic_type(&column));
            prop_assert!(is_categorical(&column));
        }

        #[test]
        fn prop_enum_always_ordered(categories in prop::collection::vec("[a-z]{1,4}", 0..8)) {
            let column = Column::native("a", EagerDtype::enumeration(categories));
            prop_assert!(is_ordered_categorical(&column));
        }
    }
}
