use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{AudioFileRepository, RepositoryError};
use crate::domain::{AudioFileRecord, FileMetadata, RecordId, Transcription};

pub struct PgAudioFileRepository {
    pool: PgPool,
}

impl PgAudioFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Brings up the `audio_files` table on first run.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS audio_files (
                id BIGSERIAL PRIMARY KEY,
                file_name TEXT NOT NULL,
                mime TEXT NOT NULL,
                rate_hertz INTEGER NOT NULL,
                transcript TEXT,
                confidence DOUBLE PRECISION,
                no_of_alternatives INTEGER,
                file_size BIGINT NOT NULL,
                request_sent_at TIMESTAMPTZ NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AudioFileRepository for PgAudioFileRepository {
    #[instrument(skip(self, record), fields(file_name = %record.file.file_name))]
    async fn create(&self, record: &AudioFileRecord) -> Result<RecordId, RepositoryError> {
        let transcription = record.transcription.as_ref();

        let row = sqlx::query(
            r#"
            INSERT INTO audio_files
                (file_name, mime, rate_hertz, transcript, confidence,
                 no_of_alternatives, file_size, request_sent_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&record.file.file_name)
        .bind(&record.file.mime)
        .bind(record.rate_hertz as i32)
        .bind(transcription.map(|t| t.transcript.as_str()))
        .bind(transcription.map(|t| t.confidence))
        .bind(transcription.map(|t| t.no_of_alternatives as i32))
        .bind(record.file.size_bytes as i64)
        .bind(record.request_sent_at)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(RecordId::from_i64(id))
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<AudioFileRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, file_name, mime, rate_hertz, transcript, confidence,
                   no_of_alternatives, file_size, request_sent_at, created_at, updated_at
            FROM audio_files
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let read = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

        let transcript: Option<String> = row.try_get("transcript").map_err(read)?;
        let confidence: Option<f64> = row.try_get("confidence").map_err(read)?;
        let alternatives: Option<i32> = row.try_get("no_of_alternatives").map_err(read)?;

        let transcription = match (transcript, confidence, alternatives) {
            (Some(transcript), Some(confidence), Some(n)) => Some(Transcription {
                transcript,
                confidence,
                no_of_alternatives: n as u32,
            }),
            _ => None,
        };

        let record_id: i64 = row.try_get("id").map_err(read)?;
        let rate_hertz: i32 = row.try_get("rate_hertz").map_err(read)?;
        let file_size: i64 = row.try_get("file_size").map_err(read)?;
        let request_sent_at: DateTime<Utc> = row.try_get("request_sent_at").map_err(read)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

        Ok(Some(AudioFileRecord {
            id: Some(RecordId::from_i64(record_id)),
            file: FileMetadata {
                file_name: row.try_get("file_name").map_err(read)?,
                mime: row.try_get("mime").map_err(read)?,
                size_bytes: file_size as u64,
            },
            rate_hertz: rate_hertz as u32,
            transcription,
            request_sent_at,
            created_at,
            updated_at,
        }))
    }
}
