//! framewise diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! framewise crates: structured error codes with a static description table
//! and the `FramewiseError` type raised at library boundaries.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for framewise operations
pub type Result<T> = std::result::Result<T, FramewiseError>;
