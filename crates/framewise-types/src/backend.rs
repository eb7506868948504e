//! Backend kinds

use framewise_diagnostics::{FramewiseError, codes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of native engines framewise normalizes over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Eager columnar engine
    Eager,
    /// Row/columnar hybrid engine
    Hybrid,
    /// Columnar in-memory format
    Arrow,
}

impl BackendKind {
    /// All backends, in declaration order
    pub const ALL: [BackendKind; 3] = [Self::Eager, Self::Hybrid, Self::Arrow];

    /// Get the short lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Hybrid => "hybrid",
            Self::Arrow => "arrow",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = FramewiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eager" => Ok(Self::Eager),
            "hybrid" => Ok(Self::Hybrid),
            "arrow" => Ok(Self::Arrow),
            other => Err(FramewiseError::capability(
                codes::UNKNOWN_BACKEND,
                format!("unknown backend '{other}'"),
            )),
        }
    }
}
