use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::BlobStore;
use crate::presentation::handlers::envelope;
use crate::presentation::state::AppState;

/// Upload + transcribe. The multipart part must be named `file`; its
/// contents are the base64-encoded FLAC audio.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<B>(
    State(state): State<AppState<B>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    B: BlobStore + 'static,
{
    // Sent time is the moment the request reached us, before any I/O below
    // adds latency.
    let request_sent_at = Utc::now();

    // A request that isn't multipart at all cannot carry a file part.
    let upload = match multipart {
        Ok(mut multipart) => read_file_part(&mut multipart).await,
        Err(e) => {
            tracing::warn!(error = %e, "Upload request is not multipart");
            None
        }
    };

    let Some((original_filename, upload)) = upload else {
        tracing::warn!("Upload request with no file part");
        return (
            StatusCode::BAD_REQUEST,
            envelope::failure(envelope::NO_FILE_MESSAGE, envelope::NO_FILE_CODE),
        )
            .into_response();
    };

    tracing::debug!(
        filename = %original_filename,
        bytes = upload.len(),
        "File upload received"
    );

    match state
        .transcription_service
        .ingest(&original_filename, upload, request_sent_at)
        .await
    {
        Ok(record) => (
            StatusCode::OK,
            envelope::success_with_record("Your file has been transcribed.", &record),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Ingestion pipeline failed");
            let (status, body) = envelope::pipeline_failure(&e);
            (status, body).into_response()
        }
    }
}

/// Pulls the `file` part out of the form. Anything that stops us reading
/// one, a missing part included, counts as no file attached.
async fn read_file_part(multipart: &mut Multipart) -> Option<(String, Bytes)> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(data) => return Some((filename, data)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file part");
                        return None;
                    }
                }
            }
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return None;
            }
        }
    }
}
