use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

/// Byte-oriented storage keyed by path, independent of the record store.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), BlobStoreError>;

    async fn get(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError>;

    /// Size in bytes of the object at `path`.
    async fn size(&self, path: &StoragePath) -> Result<u64, BlobStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
