//! # placement-board
//!
//! Item placement state machine for drag-and-drop zone boards.
//!
//! ## Design Principles
//!
//! 1. **Deployment-Configured**: No hardcoded zones or trash. Boards define
//!    their pool, zones and optional trash via `BoardConfig` at startup.
//!
//! 2. **Total Assignment**: Every item is in exactly one bucket before and
//!    after every operation. Unassigned means "in the pool".
//!
//! 3. **Silent Tolerance**: Moves never fail. Drops outside any bucket,
//!    unknown items and unknown targets leave the assignment unchanged.
//!
//! ## Architecture
//!
//! - **Owned Store**: `PlacementStore` is the only writer. Everything else
//!   reads immutable `Assignment` snapshots.
//!
//! - **Persistent Data Structures**: O(1) snapshot clones via `im-rs`.
//!
//! - **Terminal Trash**: Items dropped in the trash stay there until
//!   `reset`, which returns every item to the pool.
//!
//! ## Modules
//!
//! - `core`: Item IDs, bucket configuration, assignment snapshots, errors
//! - `zones`: The placement store and its move rules
//! - `surface`: Drag events and the `Board` controller
//! - `render`: Renderer trait and board views
//! - `presets`: Ready-made board configurations

pub mod core;
pub mod zones;
pub mod surface;
pub mod render;
pub mod presets;

// Re-export commonly used types
pub use crate::core::{
    ItemId,
    BucketId, BucketKind, BucketConfig, BucketInfo, BucketLayout, BoardConfig,
    Assignment, ConfigError,
};

pub use crate::zones::{PlacementStore, DropTarget, MoveOutcome, IgnoreReason};

pub use crate::surface::{Board, DragEvent};

pub use crate::render::{Renderer, BoardView, BucketView, NoRender};
