//! Shopping item identity
//!
//! Generated ids look like `item-01j8z7k2m3...` (a lowercase ULID behind a fixed
//! prefix). Ids read back from storage are accepted as-is, so lists written by
//! other clients keep their original ids.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Prefix for generated item ids
pub const ITEM_PREFIX: &str = "item";

/// Unique identifier of a shopping item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(format!(
            "{}-{}",
            ITEM_PREFIX,
            Ulid::new().to_string().to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id was produced by [`ItemId::new`]
    pub fn is_generated(&self) -> bool {
        self.0
            .strip_prefix(ITEM_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .map(|ulid| Ulid::from_string(&ulid.to_uppercase()).is_ok())
            .unwrap_or(false)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
