//! Board configuration types.
//!
//! Hosts configure a board at startup by providing:
//! - `BucketConfig`: One named drop target (pool, zone or trash)
//! - `BoardConfig`: The bucket set plus the item universe
//!
//! The engine never hardcodes zones - deployments define them. A validated
//! config resolves to a `BucketLayout`, which maps drop-target names to
//! compact `BucketId`s.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;
use super::item::ItemId;

/// Bucket identifier, assigned in layout order.
///
/// The pool is always `BucketId(0)`, zones follow in configuration order and
/// the trash bucket (if any) comes last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BucketId(pub u16);

impl BucketId {
    /// The reserved pool bucket.
    pub const POOL: BucketId = BucketId(0);

    /// Create a new bucket ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into per-bucket storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BucketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bucket({})", self.0)
    }
}

/// Role a bucket plays in the placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketKind {
    /// Holds every item not assigned anywhere else.
    Pool,
    /// A labeled destination zone.
    Zone,
    /// Terminal bucket: items dropped here stay until reset.
    Trash,
}

/// Configuration for a single bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Drop-target identifier reported by the drag surface.
    pub name: String,

    /// Display text. Falls back to `name` when empty.
    #[serde(default)]
    pub label: String,
}

impl BucketConfig {
    /// Create a bucket with a display label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }

    /// Create a bucket labeled with its own name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
        }
    }

    fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use placement_board::core::{BoardConfig, BucketConfig};
///
/// let config = BoardConfig::new(BucketConfig::new("available", "Available Items"))
///     .with_zone(BucketConfig::new("red", "Red Zone"))
///     .with_zone(BucketConfig::new("green", "Green Zone"))
///     .with_trash(BucketConfig::named("trash"))
///     .with_numbered_items(12);
///
/// assert!(config.has_trash());
/// assert_eq!(config.pool_name(), "available");
/// assert_eq!(config.items.len(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// The reserved pool bucket.
    pub pool: BucketConfig,

    /// Destination zones, in display order.
    #[serde(default)]
    pub zones: SmallVec<[BucketConfig; 4]>,

    /// Optional trash bucket.
    #[serde(default)]
    pub trash: Option<BucketConfig>,

    /// The item universe, in initial pool order.
    #[serde(default)]
    pub items: Vec<ItemId>,
}

impl BoardConfig {
    /// Create a configuration with only a pool and no items.
    pub fn new(pool: BucketConfig) -> Self {
        Self {
            pool,
            zones: SmallVec::new(),
            trash: None,
            items: Vec::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// Only the `pool` field is required.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a zone.
    #[must_use]
    pub fn with_zone(mut self, zone: BucketConfig) -> Self {
        self.zones.push(zone);
        self
    }

    /// Configure the trash bucket.
    #[must_use]
    pub fn with_trash(mut self, trash: BucketConfig) -> Self {
        self.trash = Some(trash);
        self
    }

    /// Append items to the universe.
    #[must_use]
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Append the numbered universe `"1"..="count"`.
    #[must_use]
    pub fn with_numbered_items(mut self, count: usize) -> Self {
        self.items.extend(ItemId::numbered(count));
        self
    }

    /// Is a trash bucket configured?
    #[must_use]
    pub fn has_trash(&self) -> bool {
        self.trash.is_some()
    }

    /// Name of the reserved pool bucket.
    #[must_use]
    pub fn pool_name(&self) -> &str {
        &self.pool.name
    }

    /// All bucket names in layout order.
    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&self.pool)
            .chain(self.zones.iter())
            .chain(self.trash.iter())
            .map(|b| b.name.as_str())
    }

    /// Validate the configuration and resolve bucket ids.
    ///
    /// Fails on empty or duplicate bucket names, duplicate items, or more
    /// buckets than fit a `BucketId`.
    pub fn layout(&self) -> Result<BucketLayout, ConfigError> {
        let total = 1 + self.zones.len() + usize::from(self.trash.is_some());
        if total > usize::from(u16::MAX) {
            return Err(ConfigError::TooManyBuckets(total));
        }

        let mut layout = BucketLayout {
            buckets: SmallVec::with_capacity(total),
            by_name: FxHashMap::default(),
            trash: None,
        };

        layout.push(&self.pool, BucketKind::Pool)?;
        for zone in &self.zones {
            layout.push(zone, BucketKind::Zone)?;
        }
        if let Some(trash) = &self.trash {
            let id = layout.push(trash, BucketKind::Trash)?;
            layout.trash = Some(id);
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for item in &self.items {
            if !seen.insert(item) {
                return Err(ConfigError::DuplicateItem(item.clone()));
            }
        }

        Ok(layout)
    }
}

/// Resolved properties of one bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInfo {
    pub id: BucketId,
    pub name: String,
    pub label: String,
    pub kind: BucketKind,
}

/// Validated bucket set with name lookup.
#[derive(Clone, Debug)]
pub struct BucketLayout {
    buckets: SmallVec<[BucketInfo; 4]>,
    by_name: FxHashMap<String, BucketId>,
    trash: Option<BucketId>,
}

impl BucketLayout {
    fn push(&mut self, config: &BucketConfig, kind: BucketKind) -> Result<BucketId, ConfigError> {
        if config.name.is_empty() {
            return Err(ConfigError::EmptyBucketName);
        }
        // Bounded by the TooManyBuckets check in `BoardConfig::layout`.
        let id = BucketId(self.buckets.len() as u16);
        if self.by_name.insert(config.name.clone(), id).is_some() {
            return Err(ConfigError::DuplicateBucket(config.name.clone()));
        }
        self.buckets.push(BucketInfo {
            id,
            name: config.name.clone(),
            label: config.display_label().to_owned(),
            kind,
        });
        Ok(id)
    }

    /// The pool bucket.
    #[must_use]
    pub fn pool(&self) -> BucketId {
        BucketId::POOL
    }

    /// The trash bucket, if configured.
    #[must_use]
    pub fn trash(&self) -> Option<BucketId> {
        self.trash
    }

    /// Is `bucket` the trash bucket?
    #[must_use]
    pub fn is_trash(&self, bucket: BucketId) -> bool {
        self.trash == Some(bucket)
    }

    /// Number of buckets, pool and trash included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// A layout always holds at least the pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Does `bucket` belong to this layout?
    #[must_use]
    pub fn contains(&self, bucket: BucketId) -> bool {
        bucket.index() < self.buckets.len()
    }

    /// Resolve a drop-target name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BucketId> {
        self.by_name.get(name).copied()
    }

    /// Get bucket properties by ID.
    #[must_use]
    pub fn get(&self, bucket: BucketId) -> Option<&BucketInfo> {
        self.buckets.get(bucket.index())
    }

    /// All buckets in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &BucketInfo> {
        self.buckets.iter()
    }

    /// Bucket ids in layout order.
    pub fn ids(&self) -> impl Iterator<Item = BucketId> + '_ {
        self.buckets.iter().map(|b| b.id)
    }
}
