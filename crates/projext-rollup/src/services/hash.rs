use std::time::{SystemTime, UNIX_EPOCH};

use super::HashGenerator;

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampHash;

impl HashGenerator for TimestampHash {
    fn hash(&self) -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default()
            .to_string()
    }
}

/// Always the same value, for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHash(pub String);

impl FixedHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}

impl HashGenerator for FixedHash {
    fn hash(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_numeric() {
        let hash = TimestampHash.hash();
        assert!(!hash.is_empty());
        assert!(hash.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn fixed_hash_never_changes() {
        let hash = FixedHash::new("abc");
        assert_eq!(hash.hash(), hash.hash());
        assert_eq!(hash.hash(), "abc");
    }
}
