//! Placement system for item locations.
//!
//! Buckets are **deployment-configured**, not hardcoded. Boards define their
//! pool, zones and optional trash via `BoardConfig` at startup.
//!
//! ## Key Types
//!
//! - `BucketId`: Compact bucket identifier (from `core::config`)
//! - `PlacementStore`: Item location tracking and movement rules
//! - `DropTarget`: Where a drag ended (a bucket, or outside)
//! - `MoveOutcome`: Whether a move applied, and why not

pub mod store;

pub use store::{DropTarget, IgnoreReason, MoveOutcome, PlacementStore};

// Re-export bucket types from core for convenience
pub use crate::core::config::{BucketId, BucketKind, BucketLayout};
