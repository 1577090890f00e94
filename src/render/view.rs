//! Render-ready board views.

use serde::{Deserialize, Serialize};

use crate::core::{Assignment, BucketId, BucketKind, BucketLayout, ItemId};
use crate::zones::PlacementStore;

/// One bucket as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketView {
    pub id: BucketId,
    /// Drop-target identifier.
    pub name: String,
    /// Display text.
    pub label: String,
    pub kind: BucketKind,
    /// Items in placement order.
    pub items: Vec<ItemId>,
}

/// Every bucket of a board, in layout order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub buckets: Vec<BucketView>,
}

impl BoardView {
    /// Build a view from a layout and an assignment snapshot.
    #[must_use]
    pub fn new(layout: &BucketLayout, assignment: &Assignment) -> Self {
        let buckets = layout
            .iter()
            .map(|info| BucketView {
                id: info.id,
                name: info.name.clone(),
                label: info.label.clone(),
                kind: info.kind,
                items: assignment.query(info.id),
            })
            .collect();

        Self { buckets }
    }

    /// Build a view of a store's current state.
    #[must_use]
    pub fn from_store(store: &PlacementStore) -> Self {
        Self::new(store.layout(), &store.snapshot())
    }

    /// Look up a bucket by drop-target name.
    #[must_use]
    pub fn bucket(&self, name: &str) -> Option<&BucketView> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Buckets that hold draggable tiles.
    ///
    /// Trashed items are never painted, so the trash bucket is skipped.
    pub fn visible_buckets(&self) -> impl Iterator<Item = &BucketView> {
        self.buckets.iter().filter(|b| b.kind != BucketKind::Trash)
    }
}
