//! Assignment snapshot: which bucket every item is in.
//!
//! Uses `im` persistent data structures so every store operation can hand
//! back an owned snapshot with an O(1) clone. Holding a snapshot never
//! blocks later moves, and later moves never change a snapshot.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::BucketId;
use super::item::ItemId;

/// Immutable view of the item → bucket mapping.
///
/// Every item of the universe is in exactly one bucket. Each bucket keeps
/// its items in placement order: the most recently moved-in item is last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    locations: ImHashMap<ItemId, BucketId>,
    buckets: Vector<Vector<ItemId>>,
}

impl Assignment {
    /// Every item in the pool, in universe order.
    pub(crate) fn initial(universe: &[ItemId], bucket_count: usize) -> Self {
        let pool: Vector<ItemId> = universe.iter().cloned().collect();
        let buckets = std::iter::once(pool)
            .chain(std::iter::repeat_with(Vector::new))
            .take(bucket_count)
            .collect();
        let locations = universe
            .iter()
            .map(|item| (item.clone(), BucketId::POOL))
            .collect();

        Self { locations, buckets }
    }

    /// Move `item` from `from` to the end of `to`.
    ///
    /// Callers guarantee `item` is currently in `from` and both buckets exist.
    pub(crate) fn relocate(&mut self, item: &ItemId, from: BucketId, to: BucketId) {
        if let Some(order) = self.buckets.get_mut(from.index()) {
            if let Some(pos) = order.index_of(item) {
                order.remove(pos);
            }
        }
        if let Some(order) = self.buckets.get_mut(to.index()) {
            order.push_back(item.clone());
        }
        self.locations.insert(item.clone(), to);
    }

    /// Get the bucket an item is in.
    #[must_use]
    pub fn bucket_of(&self, item: &ItemId) -> Option<BucketId> {
        self.locations.get(item).copied()
    }

    /// Check if an item is in a specific bucket.
    #[must_use]
    pub fn is_in(&self, item: &ItemId, bucket: BucketId) -> bool {
        self.locations.get(item) == Some(&bucket)
    }

    /// Items in a bucket, in placement order.
    ///
    /// Empty for unknown buckets.
    pub fn items_in(&self, bucket: BucketId) -> impl Iterator<Item = &ItemId> + '_ {
        self.buckets.get(bucket.index()).into_iter().flat_map(|order| order.iter())
    }

    /// Owned copy of the items in a bucket, in placement order.
    #[must_use]
    pub fn query(&self, bucket: BucketId) -> Vec<ItemId> {
        self.items_in(bucket).cloned().collect()
    }

    /// Number of items in a bucket.
    #[must_use]
    pub fn bucket_size(&self, bucket: BucketId) -> usize {
        self.buckets.get(bucket.index()).map_or(0, Vector::len)
    }

    /// Total number of items tracked.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.locations.len()
    }

    /// Number of buckets tracked.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
