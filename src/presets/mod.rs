//! Ready-made board configurations.
//!
//! The color-zones board: twelve numbered tiles start in "Available Items"
//! and can be dragged into a red zone, a green zone or the trash. Recall
//! returns everything, trashed tiles included, to the pool.

use crate::core::{BoardConfig, BucketConfig};

/// Number of tiles on the color-zones board.
pub const ITEM_COUNT: usize = 12;

/// Pool drop-target id.
pub const POOL: &str = "available";
/// Red zone drop-target id.
pub const RED: &str = "red";
/// Green zone drop-target id.
pub const GREEN: &str = "green";
/// Trash drop-target id.
pub const TRASH: &str = "trash";

/// Color-zones board with a trash bucket.
#[must_use]
pub fn color_zones() -> BoardConfig {
    color_zones_without_trash().with_trash(BucketConfig::new(TRASH, "Drop Here to Delete"))
}

/// Color-zones board without a trash bucket.
#[must_use]
pub fn color_zones_without_trash() -> BoardConfig {
    BoardConfig::new(BucketConfig::new(POOL, "Available Items"))
        .with_zone(BucketConfig::new(RED, "Red Zone"))
        .with_zone(BucketConfig::new(GREEN, "Green Zone"))
        .with_numbered_items(ITEM_COUNT)
}
