//! Storage backend trait and error type.

use async_trait::async_trait;

/// Errors from the object-store layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No object exists under the given key.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Local filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// S3 request failure.
    #[error("S3 error: {0}")]
    S3(String),
}

/// Pluggable object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    /// Remove the object under `key`. Removing a missing object is a
    /// [`StorageError::NotFound`], not a silent success -- delete-cascade
    /// relies on being told about the inconsistency.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Publicly reachable URL for the object under `key`.
    fn public_url(&self, key: &str) -> String;
}
