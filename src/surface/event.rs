//! Drag surface events.
//!
//! The drag surface detects pointer gestures and reports them as
//! `DragEvent`s. Targets are the droppable ids the surface knows about, so
//! the surface never needs to see a `BucketId`.

use serde::{Deserialize, Serialize};

use crate::core::ItemId;

/// Something the drag surface or its controls reported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEvent {
    /// The user picked up an item.
    Start { item: ItemId },
    /// The user released an item, over a droppable (`Some(name)`) or not.
    End { item: ItemId, over: Option<String> },
    /// The recall control was triggered.
    Recall,
}

impl DragEvent {
    /// Drag-start for an item.
    pub fn start(item: impl Into<ItemId>) -> Self {
        DragEvent::Start { item: item.into() }
    }

    /// Release over the droppable with the given id.
    pub fn drop_on(item: impl Into<ItemId>, target: impl Into<String>) -> Self {
        DragEvent::End {
            item: item.into(),
            over: Some(target.into()),
        }
    }

    /// Release outside every droppable.
    pub fn drop_outside(item: impl Into<ItemId>) -> Self {
        DragEvent::End {
            item: item.into(),
            over: None,
        }
    }

    /// The item this event is about, if any.
    #[must_use]
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            DragEvent::Start { item } | DragEvent::End { item, .. } => Some(item),
            DragEvent::Recall => None,
        }
    }
}
