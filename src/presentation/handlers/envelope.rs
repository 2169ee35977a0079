use axum::Json;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::application::services::PipelineError;
use crate::domain::AudioFileRecord;

// Published error codes; clients match on these.
pub const NOT_FOUND_CODE: u32 = 1_513_606_716;
pub const NO_FILE_CODE: u32 = 1_613_606_336;
pub const DECODE_CODE: u32 = 1_613_606_352;
pub const SAVE_CODE: u32 = 1_613_606_485;

pub const NOT_FOUND_MESSAGE: &str = "The file could not be found";
pub const NO_FILE_MESSAGE: &str = "No file attached!";
pub const DECODE_MESSAGE: &str = "The file contents could not be decoded.";
pub const SAVE_MESSAGE: &str = "There was a problem saving the audio file.";
pub const TRANSCRIBE_MESSAGE: &str = "The audio could not be transcribed.";

/// `{status, data, errors}` with a message-only data object.
pub fn success(message: &str) -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": {
            "message": message,
        },
        "errors": [],
    }))
}

/// `{status, data, errors}` with the full record fields. The `"rate hertz"`
/// key, space included, is part of the published contract.
pub fn success_with_record(message: &str, record: &AudioFileRecord) -> Json<Value> {
    let transcription = record.transcription.as_ref();

    Json(json!({
        "status": "success",
        "data": {
            "message": message,
            "id": record.id.map(|id| id.as_i64()),
            "file_name": record.file.file_name,
            "request_sent_at": format_sent_at(record.request_sent_at),
            "transcript": transcription.map(|t| t.transcript.as_str()),
            "confidence": transcription.map(|t| t.confidence),
            "rate hertz": record.rate_hertz,
            "no_of_alternatives": transcription.map(|t| t.no_of_alternatives),
            "file_size": record.file.size_bytes,
        },
        "errors": [],
    }))
}

/// Failure side of the envelope: empty data array, populated errors object.
pub fn failure(message: &str, error_code: u32) -> Json<Value> {
    Json(json!({
        "status": "failure",
        "data": [],
        "errors": {
            "message": message,
            "error_code": error_code,
        },
    }))
}

/// Maps each pipeline failure to its HTTP status and published error code.
/// Speech and persistence failures share one upstream code; 502 is the
/// deployment choice, applied consistently.
pub fn pipeline_failure(error: &PipelineError) -> (StatusCode, Json<Value>) {
    match error {
        PipelineError::Decode(_) => (StatusCode::BAD_REQUEST, failure(DECODE_MESSAGE, DECODE_CODE)),
        PipelineError::Speech(_) => (
            StatusCode::BAD_GATEWAY,
            failure(TRANSCRIBE_MESSAGE, SAVE_CODE),
        ),
        PipelineError::Storage(_) | PipelineError::Persistence(_) => {
            (StatusCode::BAD_GATEWAY, failure(SAVE_MESSAGE, SAVE_CODE))
        }
        PipelineError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            failure(NOT_FOUND_MESSAGE, NOT_FOUND_CODE),
        ),
    }
}

/// `request_sent_at` keeps the microsecond-resolution UTC shape clients
/// already parse, e.g. `2021-02-18T21:50:08.000000Z`.
fn format_sent_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Timestamp shape used inside human-readable messages.
pub fn format_transcribed_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
