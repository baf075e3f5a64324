//! Dataset fingerprinting - content-addressed identity for indicator files.
//!
//! A `DatasetHash` ties a rendered view or an exported CSV back to the exact
//! bytes of the source file. It also serves as a memoization key component
//! for callers that cache derived views (allowed, never required).

use std::fmt;

/// blake3 hash of an indicator file's raw bytes, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetHash(String);

impl DatasetHash {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// 8-character short form for status bars and log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for DatasetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
