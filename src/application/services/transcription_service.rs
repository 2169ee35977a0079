use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::ports::{
    AudioFileRepository, BlobStore, BlobStoreError, RepositoryError, SpeechServiceError,
};
use crate::domain::{
    AUDIO_MIME, AudioFileRecord, FileMetadata, RecordId, StoragePath, unique_file_name,
};

use super::transcriber::Transcriber;
use super::transfer_decode::{TransferDecodeError, decode_transfer_encoding};

/// Sequences one upload through staging, decoding, permanent storage,
/// transcription and persistence. Every step blocks the request until it
/// completes or fails; no step is retried.
pub struct TranscriptionService<B>
where
    B: BlobStore,
{
    blob_store: Arc<B>,
    transcriber: Transcriber,
    repository: Arc<dyn AudioFileRepository>,
}

impl<B> TranscriptionService<B>
where
    B: BlobStore,
{
    pub fn new(
        blob_store: Arc<B>,
        transcriber: Transcriber,
        repository: Arc<dyn AudioFileRepository>,
    ) -> Self {
        Self {
            blob_store,
            transcriber,
            repository,
        }
    }

    /// Turns a raw upload into a persisted transcription record.
    ///
    /// `request_sent_at` is captured by the caller before any I/O. The
    /// staged copy of the upload is removed on every path out of this
    /// function; the permanent blob is kept even when transcription or
    /// persistence fails afterwards, leaving an orphan no record points to.
    #[tracing::instrument(skip(self, upload))]
    pub async fn ingest(
        &self,
        original_filename: &str,
        upload: Bytes,
        request_sent_at: DateTime<Utc>,
    ) -> Result<AudioFileRecord, PipelineError> {
        let raw_size = upload.len();
        let temp_path = StoragePath::temp(&Uuid::new_v4().to_string());

        self.blob_store.put(&temp_path, upload).await?;
        let staged = match self.blob_store.get(&temp_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.discard_staged(&temp_path).await;
                return Err(e.into());
            }
        };

        let decoded = match decode_transfer_encoding(&staged) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "Upload is not valid base64, rejecting");
                self.discard_staged(&temp_path).await;
                return Err(e.into());
            }
        };

        let file_name = unique_file_name(original_filename, Utc::now());
        let audio_path = StoragePath::audio(&file_name);

        let stored = match self
            .blob_store
            .put(&audio_path, Bytes::from(decoded.clone()))
            .await
        {
            Ok(()) => self.blob_store.size(&audio_path).await,
            Err(e) => Err(e),
        };
        self.discard_staged(&temp_path).await;
        let size_bytes = stored?;

        tracing::debug!(
            raw_bytes = raw_size,
            decoded_bytes = size_bytes,
            path = %audio_path,
            "Decoded upload written to permanent storage"
        );

        let transcription = self.transcriber.transcribe(&decoded).await?;

        let now = Utc::now();
        let mut record = AudioFileRecord::new(
            FileMetadata {
                file_name,
                mime: AUDIO_MIME.to_string(),
                size_bytes,
            },
            transcription,
            request_sent_at,
            now,
        );

        let id = self.repository.create(&record).await?;
        record.id = Some(id);

        tracing::info!(id = %id, file_name = %record.file.file_name, "Audio file transcribed");

        Ok(record)
    }

    /// Exact-id lookup, the whole of the read side.
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, id: RecordId) -> Result<AudioFileRecord, PipelineError> {
        match self.repository.find_by_id(id).await? {
            Some(record) => Ok(record),
            None => Err(PipelineError::NotFound(id)),
        }
    }

    /// Removal of the staged upload is best effort; a leftover staging
    /// object must not fail a pipeline that otherwise succeeded.
    async fn discard_staged(&self, path: &StoragePath) {
        if let Err(e) = self.blob_store.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to remove staged upload");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transfer decoding: {0}")]
    Decode(#[from] TransferDecodeError),
    #[error("blob storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error("speech service: {0}")]
    Speech(#[from] SpeechServiceError),
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
    #[error("no record with id {0}")]
    NotFound(RecordId),
}
