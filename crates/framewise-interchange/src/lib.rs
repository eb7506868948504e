//! Interchange protocol support
//!
//! This crate provides:
//! - The protocol-level column surface (dtype kinds, categorical descriptions)
//! - `InterchangeColumn` / `InterchangeFrame` traits and in-memory implementations
//! - The fallback adapter that derives a reduced semantic type when only a
//!   protocol view of a column is available

pub mod column;
pub mod fallback;
pub mod protocol;

pub use column::*;
pub use fallback::*;
pub use protocol::*;

// Producer identity lives with the capability descriptor that gates on it
pub use framewise_types::Producer;
