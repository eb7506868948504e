//! Capability descriptor
//!
//! Whether a backend can report a categorical order flag depends on the
//! library version. Instead of querying process-wide installed packages at
//! call time, normalization consumes an explicit `Capabilities` value that
//! the caller builds (or probes from `InstalledVersions`) and injects.

use crate::{BackendKind, LibraryVersion};
use framewise_diagnostics::{FramewiseError, codes};
use serde::{Deserialize, Serialize};

/// First format version whose dictionary `ordered` flag survives
/// introspection. `None` while the upstream gap is open.
pub const ARROW_DICTIONARY_ORDERED_SINCE: Option<LibraryVersion> = None;

/// Versions of each backend library available to the process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstalledVersions {
    pub eager: Option<LibraryVersion>,
    pub hybrid: Option<LibraryVersion>,
    pub arrow: Option<LibraryVersion>,
}

impl InstalledVersions {
    /// Get the installed version of a backend, if any
    pub fn get(&self, backend: BackendKind) -> Option<LibraryVersion> {
        match backend {
            BackendKind::Eager => self.eager,
            BackendKind::Hybrid => self.hybrid,
            BackendKind::Arrow => self.arrow,
        }
    }

    /// Get the installed version of a backend, failing if it is absent
    pub fn require(&self, backend: BackendKind) -> Result<LibraryVersion, FramewiseError> {
        self.get(backend).ok_or_else(|| {
            FramewiseError::capability(
                codes::LIBRARY_NOT_INSTALLED,
                format!("no {backend} library version is installed"),
            )
        })
    }

    /// Record a backend version
    pub fn with(mut self, backend: BackendKind, version: LibraryVersion) -> Self {
        match backend {
            BackendKind::Eager => self.eager = Some(version),
            BackendKind::Hybrid => self.hybrid = Some(version),
            BackendKind::Arrow => self.arrow = Some(version),
        }
        self
    }
}

/// The library (and version) that produced an interchange column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Producer {
    pub backend: BackendKind,
    pub version: LibraryVersion,
}

impl Producer {
    pub const fn new(backend: BackendKind, version: LibraryVersion) -> Self {
        Self { backend, version }
    }
}

/// Per-backend minimum producer versions for a gated feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumVersions {
    pub eager: Option<LibraryVersion>,
    pub hybrid: Option<LibraryVersion>,
    pub arrow: Option<LibraryVersion>,
}

impl MinimumVersions {
    /// No backend supports the feature
    pub const fn none() -> Self {
        Self {
            eager: None,
            hybrid: None,
            arrow: None,
        }
    }

    /// Get the minimum version for a backend; `None` means unsupported
    pub fn get(&self, backend: BackendKind) -> Option<LibraryVersion> {
        match backend {
            BackendKind::Eager => self.eager,
            BackendKind::Hybrid => self.hybrid,
            BackendKind::Arrow => self.arrow,
        }
    }

    /// Check whether `producer` is at or above its backend's minimum
    pub fn admits(&self, producer: &Producer) -> bool {
        self.get(producer.backend)
            .is_some_and(|minimum| producer.version.at_least(&minimum))
    }
}

impl Default for MinimumVersions {
    /// Producers known to populate the interchange `is_ordered` key
    fn default() -> Self {
        Self {
            eager: Some(LibraryVersion::new(0, 20, 0)),
            hybrid: Some(LibraryVersion::new(2, 0, 0)),
            arrow: Some(LibraryVersion::new(11, 0, 0)),
        }
    }
}

/// Capability descriptor consumed by the normalizer and fallback adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Whether a dictionary-encoded array's `ordered` flag can be read back
    pub arrow_dictionary_ordered: bool,
    /// Minimum producer versions that populate the interchange order key
    pub interchange_ordered_since: MinimumVersions,
}

impl Capabilities {
    /// Built-in defaults: nothing is assumed beyond the known version table
    pub fn conservative() -> Self {
        Self::default()
    }

    /// Derive capabilities from the installed library versions
    pub fn probe(installed: &InstalledVersions) -> Self {
        let arrow_dictionary_ordered = match (ARROW_DICTIONARY_ORDERED_SINCE, installed.arrow) {
            (Some(minimum), Some(version)) => version.at_least(&minimum),
            _ => false,
        };
        log::debug!(
            "probed capabilities for {:?}: arrow_dictionary_ordered={}",
            installed,
            arrow_dictionary_ordered
        );
        Self {
            arrow_dictionary_ordered,
            interchange_ordered_since: MinimumVersions::default(),
        }
    }

    /// Check whether `producer` populates the interchange `is_ordered` key
    pub fn interchange_exposes_ordered(&self, producer: &Producer) -> bool {
        self.interchange_ordered_since.admits(producer)
    }

    /// Set whether the dictionary order flag is introspectable
    pub fn with_arrow_dictionary_ordered(mut self, supported: bool) -> Self {
        self.arrow_dictionary_ordered = supported;
        self
    }

    /// Replace the interchange version gate
    pub fn with_interchange_ordered_since(mut self, minimums: MinimumVersions) -> Self {
        self.interchange_ordered_since = minimums;
        self
    }
}
