/// Failure of the durable storage facility itself.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by [`CartStore`](crate::CartStore) operations.
///
/// Corrupt persisted state is not an error; hydration resets it.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Cart storage unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),

    #[error("Failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}
