//! JSON configuration
//!
//! A configuration file records the installed backend versions and may pin
//! an explicit capability descriptor:
//!
//! ```json
//! {
//!   "installed": { "hybrid": "2.2.1", "arrow": "16.1.0" },
//!   "capabilities": { "arrow_dictionary_ordered": false }
//! }
//! ```
//!
//! Without `capabilities`, the descriptor is probed from `installed`.

use crate::{BackendKind, Capabilities, InstalledVersions, Producer};
use framewise_diagnostics::{FramewiseError, codes};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level framewise configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramewiseConfig {
    pub installed: InstalledVersions,
    pub capabilities: Option<Capabilities>,
}

impl FramewiseConfig {
    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, FramewiseError> {
        serde_json::from_str(json).map_err(|e| {
            FramewiseError::config(codes::INVALID_CONFIG, format!("invalid configuration: {e}"))
        })
    }

    /// Load configuration from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FramewiseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            FramewiseError::config(codes::IO_ERROR, e.to_string())
                .with_context(path.display().to_string())
        })?;
        Self::from_json(&json).map_err(|e| e.with_context(path.display().to_string()))
    }

    /// The capability descriptor to inject into normalization
    pub fn capabilities(&self) -> Capabilities {
        match &self.capabilities {
            Some(caps) => caps.clone(),
            None => Capabilities::probe(&self.installed),
        }
    }

    /// The producer identity of an installed backend
    pub fn producer(&self, backend: BackendKind) -> Result<Producer, FramewiseError> {
        Ok(Producer::new(backend, self.installed.require(backend)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibraryVersion;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_from_json_probes_when_capabilities_absent() {
        let config = FramewiseConfig::from_json(r#"{"installed": {"hybrid": "2.2.1"}}"#).unwrap();
        assert_eq!(config.installed.hybrid, Some(LibraryVersion::new(2, 2, 1)));
        assert_eq!(config.capabilities(), Capabilities::conservative());
    }

    #[test]
    fn test_explicit_capabilities_win() {
        let config = FramewiseConfig::from_json(
            r#"{
                "installed": {"arrow": "16.1.0"},
                "capabilities": {"arrow_dictionary_ordered": true}
            }"#,
        )
        .unwrap();
        let caps = config.capabilities();
        assert!(caps.arrow_dictionary_ordered);
        // unspecified fields keep their defaults
        assert_eq!(caps.interchange_ordered_since, Default::default());
    }

    #[test]
    fn test_invalid_version_is_config_error() {
        let err = FramewiseConfig::from_json(r#"{"installed": {"eager": "latest"}}"#).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_CONFIG);
        assert!(err.message().contains("latest"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"installed": {{"eager": "1.2.0"}}}}"#).unwrap();

        let config = FramewiseConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config.producer(BackendKind::Eager).unwrap(),
            Producer::new(BackendKind::Eager, LibraryVersion::new(1, 2, 0))
        );
        assert!(config.producer(BackendKind::Hybrid).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FramewiseConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), codes::IO_ERROR);
        match err {
            FramewiseError::Config { context, .. } => {
                assert!(context.unwrap().ends_with("absent.json"));
            }
            other => panic!("Expected Config, got: {:?}", other),
        }
    }
}
