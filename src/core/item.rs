//! Item identification.
//!
//! Every tile on a board has an `ItemId`. Ids are opaque strings: the engine
//! only compares and hashes them, hosts decide what they mean.
//!
//! ## Usage
//!
//! ```
//! use placement_board::core::ItemId;
//!
//! let items = ItemId::numbered(3);
//! assert_eq!(items, vec![ItemId::new("1"), ItemId::new("2"), ItemId::new("3")]);
//! assert_eq!(items[1].as_str(), "2");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an item in the board universe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate the numbered universe `"1"..="count"`.
    ///
    /// This is the universe every observed board starts with.
    #[must_use]
    pub fn numbered(count: usize) -> Vec<Self> {
        (1..=count).map(|i| Self(i.to_string())).collect()
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item {}", self.0)
    }
}
