use std::sync::Arc;

use crate::application::ports::BlobStore;
use crate::application::services::TranscriptionService;

pub struct AppState<B>
where
    B: BlobStore,
{
    pub transcription_service: Arc<TranscriptionService<B>>,
}

impl<B> Clone for AppState<B>
where
    B: BlobStore,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
