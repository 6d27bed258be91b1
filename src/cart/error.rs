//! Error types for cart operations.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by [`CartStore`](super::CartStore) operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The item name is empty once surrounding whitespace is removed.
    #[error("item name must not be empty")]
    EmptyName,

    /// A zero quantity was requested.
    #[error("quantity must not be zero")]
    ZeroQuantity,

    /// The cart could not be encoded as JSON.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
