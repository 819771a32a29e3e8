use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure or non-2xx response, carried as a human-readable
    /// message for the notification layer. Nothing is retried or rolled
    /// back; prior in-memory state stays intact.
    #[error("{0}")]
    Api(String),

    #[error("no open check-out transaction found for this product")]
    NoOpenCheckOut,
}
