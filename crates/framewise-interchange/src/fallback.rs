//! Protocol-only type fallback
//!
//! When a column carries no native object, only an interchange view, the
//! semantic type is derived from the protocol dtype alone. Detection is
//! limited to "categorical, and was an order flag reported": the protocol
//! carries no category list, so an enum cannot be told apart from a plain
//! categorical.

use crate::{DtypeKind, InterchangeColumn};
use framewise_types::{Capabilities, OpaqueType, OrderFlag, SemanticType};

/// Derives a reduced semantic type from an interchange column
#[derive(Debug, Clone, Copy)]
pub struct FallbackAdapter<'a> {
    capabilities: &'a Capabilities,
}

impl<'a> FallbackAdapter<'a> {
    pub fn new(capabilities: &'a Capabilities) -> Self {
        Self { capabilities }
    }

    /// Read the categorical order flag a protocol column reports
    ///
    /// A known producer must be at or above the version that populates the
    /// flag. Columns with no known producer are read as reported. The result
    /// is `Unsupported` when the gate fails or the flag is left unset.
    pub fn order_flag(&self, column: &dyn InterchangeColumn) -> OrderFlag {
        match column.producer() {
            Some(producer) if !self.capabilities.interchange_exposes_ordered(&producer) => {
                log::debug!(
                    "{} {} does not expose the interchange order flag",
                    producer.backend,
                    producer.version
                );
                return OrderFlag::Unsupported;
            }
            Some(_) => {}
            None => log::debug!(
                "interchange column `{}` has no known producer; skipping version gate",
                column.name()
            ),
        }
        match column.describe_categorical() {
            Ok(description) => match description.is_ordered {
                Some(ordered) => OrderFlag::Declared(ordered),
                None => {
                    log::debug!("interchange order flag of `{}` is unset", column.name());
                    OrderFlag::Unsupported
                }
            },
            Err(err) => {
                log::debug!("cannot describe interchange categorical: {err}");
                OrderFlag::Unsupported
            }
        }
    }

    /// Derive the semantic type of a protocol-only column
    pub fn normalize(&self, column: &dyn InterchangeColumn) -> SemanticType {
        let dtype = column.dtype();
        log::trace!("normalizing interchange dtype {dtype}");
        match dtype.kind {
            DtypeKind::Categorical => SemanticType::categorical(self.order_flag(column).is_ordered()),
            kind => SemanticType::other(OpaqueType::interchange(kind.name())),
        }
    }
}
