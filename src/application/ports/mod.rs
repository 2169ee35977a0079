mod audio_file_repository;
mod blob_store;
mod speech_service;

pub use audio_file_repository::{AudioFileRepository, RepositoryError};
pub use blob_store::{BlobStore, BlobStoreError};
pub use speech_service::{
    RecognitionAlternative, RecognitionConfig, RecognitionResult, SpeechService,
    SpeechServiceError,
};
