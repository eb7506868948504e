//! Library versions

use framewise_diagnostics::FramewiseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Leading numeric release components; pre-release/dev/local suffixes are ignored.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*v?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("version pattern is valid")
});

/// A `major.minor.patch` library version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LibraryVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Check if this version is at or above `minimum`
    pub fn at_least(&self, minimum: &LibraryVersion) -> bool {
        self >= minimum
    }
}

impl FromStr for LibraryVersion {
    type Err = FramewiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_RE
            .captures(s)
            .ok_or_else(|| FramewiseError::invalid_version(s))?;
        let component = |i: usize| -> Result<u32, FramewiseError> {
            match caps.get(i) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| FramewiseError::invalid_version(s)),
                None => Ok(0),
            }
        };
        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl TryFrom<String> for LibraryVersion {
    type Error = FramewiseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LibraryVersion> for String {
    fn from(version: LibraryVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
