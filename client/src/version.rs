//! Client version handling for the data proxy.
//!
//! The data proxy addresses a deployed client by its version, so only plain
//! `major.minor.patch` versions are accepted. Pre-release and build suffixes
//! (`4.0.0-dev.1`, `4.0.0+abc`) are rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::data_proxy::DataProxyError;

#[allow(clippy::expect_used)] // constant pattern
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("version pattern compiles")
});

/// A `major.minor.patch` client version.
///
/// # Invariants
///
/// - `as_str()` always matches `^[0-9]+\.[0-9]+\.[0-9]+$`.
/// - Components are kept as the decimal strings supplied, with no upper
///   bound on their value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientVersion(String);

impl ClientVersion {
    /// Parse a version string.
    ///
    /// # Errors
    ///
    /// Returns `DataProxyError::InvalidVersionFormat` if the string is not
    /// three dot-separated runs of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, DataProxyError> {
        if VERSION_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DataProxyError::InvalidVersionFormat)
        }
    }

    #[must_use]
    pub fn major(&self) -> &str {
        self.component(0)
    }

    #[must_use]
    pub fn minor(&self) -> &str {
        self.component(1)
    }

    #[must_use]
    pub fn patch(&self) -> &str {
        self.component(2)
    }

    /// The version exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn component(&self, index: usize) -> &str {
        self.0.split('.').nth(index).unwrap_or_default()
    }
}

impl FromStr for ClientVersion {
    type Err = DataProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
