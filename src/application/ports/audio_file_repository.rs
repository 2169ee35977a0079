use async_trait::async_trait;

use crate::domain::{AudioFileRecord, RecordId};

/// Record store for ingested audio files, keyed by numeric id.
#[async_trait]
pub trait AudioFileRepository: Send + Sync {
    /// Persists the record and returns the id the store assigned.
    async fn create(&self, record: &AudioFileRecord) -> Result<RecordId, RepositoryError>;

    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<AudioFileRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
