//! Fixed-capacity hash set over strings.
//!
//! [`StringSet`] resolves collisions by separate chaining: every bucket owns
//! a singly linked chain of the entries that hash to it. The bucket count is
//! fixed when the set is created; the set never resizes.
//!
//! # Architecture
//!
//! - [`hash`] -- Polynomial rolling string hash and bucket index mapping
//! - [`set`] -- The `StringSet` itself, its iterators and rendering
//! - `chain` -- Owned singly linked bucket chains
//! - `occupancy` -- Index of non-empty buckets used for random sampling

mod chain;
pub mod hash;
mod occupancy;
pub mod set;

pub use chain::BucketIter;
pub use set::{DEFAULT_CAPACITY, Iter, StringSet};

/// Error type for string set construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    #[error("bucket count must not be negative, got {0}")]
    NegativeCapacity(i64),
}
