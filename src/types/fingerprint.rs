//! Fingerprint output type.

use serde::{Deserialize, Serialize};

/// A short, content-derived identifier.
///
/// Every symbol is drawn from the first 64 symbols of the alphabet it was
/// encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap an already-encoded fingerprint string.
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// Get the fingerprint as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` for a zero-length fingerprint.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Fingerprint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
