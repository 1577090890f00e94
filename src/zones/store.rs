//! Placement store: item locations and movement rules.
//!
//! The `PlacementStore` owns the assignment of every item to a bucket and is
//! the only thing allowed to change it. It supports:
//! - Moving an item to a bucket (appended last)
//! - Ignoring drops outside any bucket or on unknown targets
//! - A terminal trash bucket that only `reset` empties
//! - Resetting every item back to the pool

use tracing::{debug, trace};

use crate::core::assignment::Assignment;
use crate::core::config::{BoardConfig, BucketId, BucketLayout};
use crate::core::error::ConfigError;
use crate::core::item::ItemId;

/// Where a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Released over a bucket.
    Bucket(BucketId),
    /// Released outside every recognized bucket.
    Outside,
}

impl From<Option<BucketId>> for DropTarget {
    fn from(bucket: Option<BucketId>) -> Self {
        bucket.map_or(DropTarget::Outside, DropTarget::Bucket)
    }
}

impl From<BucketId> for DropTarget {
    fn from(bucket: BucketId) -> Self {
        DropTarget::Bucket(bucket)
    }
}

/// Why a move left the assignment unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Dropped outside any bucket.
    Outside,
    /// Item is not part of the universe.
    UnknownItem,
    /// Target bucket is not configured.
    UnknownBucket,
    /// Item is already in the target bucket.
    SameBucket,
    /// Item is in the trash and stays there until reset.
    Trashed,
}

impl IgnoreReason {
    /// Short name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IgnoreReason::Outside => "outside",
            IgnoreReason::UnknownItem => "unknown_item",
            IgnoreReason::UnknownBucket => "unknown_bucket",
            IgnoreReason::SameBucket => "same_bucket",
            IgnoreReason::Trashed => "trashed",
        }
    }
}

/// Result of a single move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item changed buckets.
    Moved { from: BucketId, to: BucketId },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Did the assignment change?
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Owns the item → bucket assignment for one board.
///
/// ## Usage
///
/// ```
/// use placement_board::core::{BoardConfig, BucketConfig, ItemId};
/// use placement_board::zones::{DropTarget, PlacementStore};
///
/// let config = BoardConfig::new(BucketConfig::named("pool"))
///     .with_zone(BucketConfig::named("zoneA"))
///     .with_zone(BucketConfig::named("zoneB"))
///     .with_numbered_items(3);
/// let mut store = PlacementStore::new(&config).unwrap();
///
/// let zone_a = store.layout().resolve("zoneA").unwrap();
/// let snapshot = store.move_item(&ItemId::new("2"), DropTarget::Bucket(zone_a));
///
/// assert_eq!(snapshot.query(zone_a), vec![ItemId::new("2")]);
/// assert_eq!(store.query_named("pool"), vec![ItemId::new("1"), ItemId::new("3")]);
/// ```
#[derive(Clone, Debug)]
pub struct PlacementStore {
    layout: BucketLayout,
    /// Item universe in initial pool order.
    universe: Vec<ItemId>,
    assignment: Assignment,
}

impl PlacementStore {
    /// Create a store with every item in the pool.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        let layout = config.layout()?;
        let universe = config.items.clone();
        let assignment = Assignment::initial(&universe, layout.len());

        debug!(
            buckets = layout.len(),
            items = universe.len(),
            trash = layout.trash().is_some(),
            "placement store created"
        );

        Ok(Self {
            layout,
            universe,
            assignment,
        })
    }

    /// Apply a move and report what happened.
    pub fn apply_move(&mut self, item: &ItemId, target: DropTarget) -> MoveOutcome {
        let outcome = self.plan_move(item, target);

        match outcome {
            MoveOutcome::Moved { from, to } => {
                self.assignment.relocate(item, from, to);
                debug!(item = item.as_str(), %from, %to, "moved item");
            }
            MoveOutcome::Ignored(reason) => {
                trace!(item = item.as_str(), reason = reason.as_str(), "ignored move");
            }
        }

        outcome
    }

    fn plan_move(&self, item: &ItemId, target: DropTarget) -> MoveOutcome {
        let to = match target {
            DropTarget::Outside => return MoveOutcome::Ignored(IgnoreReason::Outside),
            DropTarget::Bucket(bucket) if !self.layout.contains(bucket) => {
                return MoveOutcome::Ignored(IgnoreReason::UnknownBucket);
            }
            DropTarget::Bucket(bucket) => bucket,
        };

        let Some(from) = self.assignment.bucket_of(item) else {
            return MoveOutcome::Ignored(IgnoreReason::UnknownItem);
        };

        if self.layout.is_trash(from) {
            MoveOutcome::Ignored(IgnoreReason::Trashed)
        } else if from == to {
            MoveOutcome::Ignored(IgnoreReason::SameBucket)
        } else {
            MoveOutcome::Moved { from, to }
        }
    }

    /// Move an item and return the resulting snapshot.
    ///
    /// Never fails: drops outside any bucket, unknown items, unknown buckets,
    /// moves into the current bucket and moves out of the trash all leave
    /// the assignment unchanged.
    pub fn move_item(&mut self, item: &ItemId, target: DropTarget) -> Assignment {
        self.apply_move(item, target);
        self.snapshot()
    }

    /// Move an item to the bucket named by a drop-target id.
    ///
    /// `None` and unconfigured names are treated as dropping outside.
    pub fn move_to_named(&mut self, item: &ItemId, over: Option<&str>) -> Assignment {
        let target = DropTarget::from(over.and_then(|name| self.layout.resolve(name)));
        self.move_item(item, target)
    }

    /// Return every item, trashed ones included, to the pool.
    ///
    /// The pool is restored to universe order and every other bucket is empty.
    pub fn reset(&mut self) -> Assignment {
        self.assignment = Assignment::initial(&self.universe, self.layout.len());
        debug!(items = self.universe.len(), "reset all items to pool");
        self.snapshot()
    }

    /// Items in a bucket, most recently placed last.
    ///
    /// Returns empty for unknown buckets.
    #[must_use]
    pub fn query(&self, bucket: BucketId) -> Vec<ItemId> {
        self.assignment.query(bucket)
    }

    /// Items in the bucket with the given name.
    #[must_use]
    pub fn query_named(&self, name: &str) -> Vec<ItemId> {
        self.layout
            .resolve(name)
            .map_or_else(Vec::new, |bucket| self.query(bucket))
    }

    /// Get the bucket an item is in.
    #[must_use]
    pub fn bucket_of(&self, item: &ItemId) -> Option<BucketId> {
        self.assignment.bucket_of(item)
    }

    /// Can the item still be dragged? False for trashed and unknown items.
    #[must_use]
    pub fn is_movable(&self, item: &ItemId) -> bool {
        self.bucket_of(item)
            .is_some_and(|bucket| !self.layout.is_trash(bucket))
    }

    /// Immutable snapshot of the current assignment.
    #[must_use]
    pub fn snapshot(&self) -> Assignment {
        self.assignment.clone()
    }

    /// The bucket layout this store was built with.
    #[must_use]
    pub fn layout(&self) -> &BucketLayout {
        &self.layout
    }

    /// The item universe, in initial pool order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.universe
    }
}
