//! Core board types: items, bucket configuration, assignment snapshots, errors.
//!
//! This module contains the building blocks that are deployment-agnostic.
//! Boards configure these via `BoardConfig` rather than modifying the core.

pub mod item;
pub mod config;
pub mod assignment;
pub mod error;

pub use item::ItemId;
pub use config::{BucketId, BucketKind, BucketConfig, BucketInfo, BucketLayout, BoardConfig};
pub use assignment::Assignment;
pub use error::ConfigError;
