use crate::core::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    /// Persisted data could not be read back
    #[error("Failed to read catalogue from {location}: {source}")]
    StorageRead {
        location: String,
        #[source]
        source: StorageError,
    },

    /// Persisting a mutation failed. The in-memory catalogue has been rolled back.
    #[error("Failed to write catalogue to {location}: {source} (change rolled back)")]
    StorageWrite {
        location: String,
        #[source]
        source: StorageError,
    },

    #[error("Dish not found: {0}")]
    NotFound(String),
}
