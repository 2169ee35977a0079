mod audio_file;
mod storage_path;
mod unique_name;

pub use audio_file::{
    AUDIO_MIME, AudioFileRecord, FileMetadata, RATE_HERTZ, RecordId, Transcription,
};
pub use storage_path::StoragePath;
pub use unique_name::unique_file_name;
