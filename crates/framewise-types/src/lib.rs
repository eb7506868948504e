//! framewise type system
//!
//! This crate defines the backend-independent type vocabulary:
//! - The semantic type model (categorical family plus an opaque catch-all)
//! - Read-only mirrors of each backend's native dtype descriptors
//! - Library versions and the capability descriptor consumed by normalization
//! - JSON configuration for installed versions and capabilities

pub mod backend;
pub mod capabilities;
pub mod config;
pub mod native;
pub mod semantic;
pub mod version;

pub use backend::*;
pub use capabilities::*;
pub use config::*;
pub use native::*;
pub use semantic::*;
pub use version::*;
