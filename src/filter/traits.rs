//! Contract of the external membership filter

use crate::index::EntityInfo;
use serde::{Deserialize, Serialize};

/// Result code returned by filter operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Ok,
    NotFound,
    NotEnoughSpace,
    NotSupported,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Ok => "Ok",
            Status::NotFound => "NotFound",
            Status::NotEnoughSpace => "NotEnoughSpace",
            Status::NotSupported => "NotSupported",
        };
        f.write_str(s)
    }
}

/// An entity as presented to the filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    pub content: String,
}

impl EntityKey {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Base-31 polynomial hash over the UTF-8 bytes
    ///
    /// Bytes are sign-extended before adding and all arithmetic wraps, so
    /// non-ASCII names hash the same way the filter's own key conversion
    /// does.
    pub fn fingerprint(&self) -> u64 {
        self.content.bytes().fold(0u64, |acc, b| {
            acc.wrapping_mul(31).wrapping_add(b as i8 as i64 as u64)
        })
    }
}

impl From<&str> for EntityKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Probabilistic membership structure holding entity metadata
///
/// Implementations own their hashing, bucket layout and displacement
/// policy. `Status` values are reported to callers unchanged.
pub trait MembershipFilter {
    /// Store `info` under `item`
    fn insert(&mut self, item: &EntityKey, info: EntityInfo) -> Status;

    /// Metadata stored for `item`, `None` meaning not found
    fn extract(&self, item: &EntityKey) -> Option<EntityInfo>;

    /// Reorder and consolidate internal storage
    fn compact(&mut self);

    /// Group stored entries into at most `max_tree_count` trees of at most
    /// `max_node_count` nodes each
    fn build_trees(&mut self, max_tree_count: usize, max_node_count: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_ascii() {
        assert_eq!(EntityKey::new("").fingerprint(), 0);
        assert_eq!(EntityKey::new("a").fingerprint(), 97);
        assert_eq!(EntityKey::new("ab").fingerprint(), 97 * 31 + 98);
    }

    #[test]
    fn test_fingerprint_sign_extends_high_bytes() {
        // 0xC3 as a signed byte is -61
        let key = EntityKey::new("é");
        let expected = (-61i64 as u64).wrapping_mul(31).wrapping_add(-87i64 as u64);
        assert_eq!(key.fingerprint(), expected);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::NotEnoughSpace.to_string(), "NotEnoughSpace");
        assert!(Status::Ok.is_ok());
        assert!(!Status::NotFound.is_ok());
    }
}
