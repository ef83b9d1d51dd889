//! Strongly-typed branch identifier.
//!
//! Branch ids are short display codes ("CSE", "IT", "ECE"). The wrapper
//! enforces the non-empty invariant at every construction site, including
//! deserialization, so the rest of the crate never re-checks it.

use serde::{Deserialize, Deserializer, Serialize};

/// A non-empty branch identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BranchId(String);

impl<'de> Deserialize<'de> for BranchId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BranchId::try_new(s).ok_or_else(|| serde::de::Error::custom("BranchId must not be empty"))
    }
}

impl BranchId {
    /// Create a new id, panicking if it is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "BranchId must not be empty");
        Self(s)
    }

    /// Try to create a new id, returning `None` if it is empty.
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the underlying id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for BranchId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BranchId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BranchId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_id() {
        assert!(BranchId::try_new("").is_none());
        assert!(BranchId::try_new("CSE").is_some());
    }

    #[test]
    fn compares_against_str() {
        let id = BranchId::new("ECE");
        assert_eq!(id, "ECE");
        assert_eq!(id.as_str(), "ECE");
    }

    #[test]
    fn deserialize_rejects_empty() {
        let ok: Result<BranchId, _> = serde_yaml::from_str("IT");
        assert!(ok.is_ok());
        let err: Result<BranchId, _> = serde_yaml::from_str("\"\"");
        assert!(err.is_err());
    }
}
