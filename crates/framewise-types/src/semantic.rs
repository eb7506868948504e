//! Semantic type model
//!
//! The backend-independent vocabulary every native dtype and every
//! interchange dtype is normalized onto. Only the categorical family is
//! modelled in depth; everything else is carried as an opaque type.
//!
//! Values of this model are transient: they are derived from a column each
//! time a predicate runs and are never cached or mutated.

use crate::BackendKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The unified semantic type of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SemanticType {
    /// Finite, named-category type; `ordered` states whether category
    /// order is semantically significant
    Categorical { ordered: bool },

    /// Closed, explicitly listed category set. The sequence itself defines
    /// the order, so an enum is always ordered.
    Enum { categories: Vec<String> },

    /// Storage-level dictionary encoding whose order flag may not be
    /// introspectable on every library version
    DictionaryEncoded { ordered: OrderFlag },

    /// Any type outside the categorical family
    Other(OpaqueType),
}

/// Declared order of a dictionary-encoded column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFlag {
    /// The backend reported the flag
    Declared(bool),
    /// The backend cannot report the flag on this version
    Unsupported,
}

impl OrderFlag {
    /// Only an explicitly declared `true` counts as ordered
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Declared(true))
    }

    /// Check whether the backend could report the flag at all
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Declared(_))
    }
}

impl fmt::Display for OrderFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(ordered) => write!(f, "{ordered}"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

/// Where an unmodelled type came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOrigin {
    /// A native backend descriptor
    Native(BackendKind),
    /// A protocol-level interchange descriptor
    Interchange,
}

impl fmt::Display for TypeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(backend) => write!(f, "{backend}"),
            Self::Interchange => f.write_str("interchange"),
        }
    }
}

/// A non-categorical type, kept only by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueType {
    pub origin: TypeOrigin,
    pub name: String,
}

impl OpaqueType {
    pub fn native(backend: BackendKind, name: impl Into<String>) -> Self {
        Self {
            origin: TypeOrigin::Native(backend),
            name: name.into(),
        }
    }

    pub fn interchange(name: impl Into<String>) -> Self {
        Self {
            origin: TypeOrigin::Interchange,
            name: name.into(),
        }
    }
}

impl SemanticType {
    // === Constructors ===

    /// Create a categorical type
    pub fn categorical(ordered: bool) -> Self {
        Self::Categorical { ordered }
    }

    /// Create an enum type from its categories, in order
    pub fn enumeration<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a dictionary-encoded type
    pub fn dictionary(ordered: OrderFlag) -> Self {
        Self::DictionaryEncoded { ordered }
    }

    /// Create an opaque type
    pub fn other(ty: OpaqueType) -> Self {
        Self::Other(ty)
    }

    // === Type Properties ===

    /// Check if this type belongs to the categorical family
    pub fn is_categorical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Check if this is an enum type
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }

    /// Check if category order is semantically significant
    ///
    /// Total over every variant: non-categorical types are never ordered.
    pub fn is_ordered(&self) -> bool {
        match self {
            Self::Categorical { ordered } => *ordered,
            Self::Enum { .. } => true,
            Self::DictionaryEncoded { ordered } => ordered.is_ordered(),
            Self::Other(_) => false,
        }
    }

    /// Get the explicit category list, when the type carries one
    pub fn categories(&self) -> Option<&[String]> {
        match self {
            Self::Enum { categories } => Some(categories),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Categorical { ordered } => write!(f, "Categorical(ordered={ordered})"),
            Self::Enum { categories } => write!(f, "Enum[{}]", categories.join(", ")),
            Self::DictionaryEncoded { ordered } => write!(f, "Dictionary(ordered={ordered})"),
            Self::Other(ty) => write!(f, "Other({}:{})", ty.origin, ty.name),
        }
    }
}
