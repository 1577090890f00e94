//! Configuration errors.
//!
//! Moves, resets and queries never fail. Building a board from a
//! configuration is the only fallible step.

use thiserror::Error;

use super::item::ItemId;

/// Error raised while validating a `BoardConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bucket name must not be empty")]
    EmptyBucketName,

    #[error("bucket name `{0}` is configured more than once")]
    DuplicateBucket(String),

    #[error("item `{}` appears more than once in the universe", .0.as_str())]
    DuplicateItem(ItemId),

    #[error("too many buckets: {0} configured, at most {max} supported", max = u16::MAX)]
    TooManyBuckets(usize),

    #[error("invalid board configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
