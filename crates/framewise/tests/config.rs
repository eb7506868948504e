//! Capability configuration loaded from disk

use framewise::interchange::{CategoricalDescription, ProtocolColumn};
use framewise::{
    ArrowDataType, BackendKind, Column, FramewiseConfig, LibraryVersion, TypeNormalizer,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_installed_versions_drive_producer_gate() {
    let file = write_config(r#"{"installed": {"hybrid": "1.5.3", "arrow": "16.1.0"}}"#);
    let config = FramewiseConfig::from_json_file(file.path()).unwrap();
    let normalizer = TypeNormalizer::from_config(&config);

    let producer = config.producer(BackendKind::Hybrid).unwrap();
    let column = Column::interchange(Arc::new(
        ProtocolColumn::categorical("a", CategoricalDescription::ordered(true)).with_producer(producer),
    ));
    assert!(!normalizer.is_ordered_categorical(&column));
    assert!(normalizer.is_categorical(&column));
}

#[test]
fn test_pinned_capabilities() {
    let file = write_config(
        r#"{
            "installed": {"arrow": "16.1.0"},
            "capabilities": {
                "arrow_dictionary_ordered": true,
                "interchange_ordered_since": {"hybrid": "1.0.0"}
            }
        }"#,
    );
    let config = FramewiseConfig::from_json_file(file.path()).unwrap();
    let normalizer = TypeNormalizer::from_config(&config);

    let column = Column::native(
        "a",
        ArrowDataType::dictionary(ArrowDataType::Int16, ArrowDataType::Utf8, true),
    );
    assert!(normalizer.is_ordered_categorical(&column));

    // backends left out of a pinned gate keep the built-in minimums
    let gate = &normalizer.capabilities().interchange_ordered_since;
    assert_eq!(gate.hybrid, Some(LibraryVersion::new(1, 0, 0)));
    assert_eq!(gate.eager, Some(LibraryVersion::new(0, 20, 0)));
}

#[test]
fn test_malformed_config() {
    let file = write_config("{ not json");
    let err = FramewiseConfig::from_json_file(file.path()).unwrap_err();
    assert!(err.code().is_system_error());
}
