use std::fmt;

use chrono::{DateTime, Utc};

/// Container type every stored file is treated as. No inspection of the
/// actual bytes is performed; mismatched uploads degrade transcription
/// quality instead of failing fast.
pub const AUDIO_MIME: &str = "audio/flac";

/// Sample rate declared to the speech service. A constant, not a measured
/// property of the upload.
pub const RATE_HERTZ: u32 = 44_100;

/// Identifier assigned by the persistent store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(i64);

impl RecordId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of the stored (decoded) file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    /// Unique name the decoded bytes are stored under.
    pub file_name: String,
    pub mime: String,
    /// Size of the decoded bytes written to blob storage, never the raw
    /// upload size.
    pub size_bytes: u64,
}

/// Outcome of a successful speech-service call. The three fields only ever
/// travel together; a record carries either a whole `Transcription` or none.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    pub transcript: String,
    pub confidence: f64,
    pub no_of_alternatives: u32,
}

/// One ingested audio file plus its transcription outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFileRecord {
    /// None until the record has been persisted.
    pub id: Option<RecordId>,
    pub file: FileMetadata,
    pub rate_hertz: u32,
    pub transcription: Option<Transcription>,
    /// Captured when the HTTP request was first received, before any I/O.
    pub request_sent_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AudioFileRecord {
    pub fn new(
        file: FileMetadata,
        transcription: Transcription,
        request_sent_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            file,
            rate_hertz: RATE_HERTZ,
            transcription: Some(transcription),
            request_sent_at,
            created_at,
            updated_at: created_at,
        }
    }
}
