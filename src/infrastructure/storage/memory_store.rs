use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

/// In-memory blob storage. Backs tests and storage-free deployments.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().expect("blob map poisoned").len()
    }
}

#[async_trait::async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), BlobStoreError> {
        self.objects
            .lock()
            .expect("blob map poisoned")
            .insert(path.as_str().to_string(), data);
        Ok(())
    }

    async fn get(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        self.objects
            .lock()
            .expect("blob map poisoned")
            .get(path.as_str())
            .map(|b| b.to_vec())
            .ok_or_else(|| BlobStoreError::NotFound(path.to_string()))
    }

    async fn size(&self, path: &StoragePath) -> Result<u64, BlobStoreError> {
        self.objects
            .lock()
            .expect("blob map poisoned")
            .get(path.as_str())
            .map(|b| b.len() as u64)
            .ok_or_else(|| BlobStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), BlobStoreError> {
        self.objects
            .lock()
            .expect("blob map poisoned")
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| BlobStoreError::NotFound(path.to_string()))
    }
}
