use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::BlobStore;
use crate::domain::RecordId;
use crate::presentation::handlers::envelope;
use crate::presentation::state::AppState;

/// GET without an id doubles as a connectivity check.
pub async fn transcriptions_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        envelope::success(
            "You're connected to the API. Supply an audio file id to see its transcription.",
        ),
    )
}

/// Fetch one transcription record by id. Ids that don't parse can't match a
/// record, so they get the same not-found failure.
#[tracing::instrument(skip(state))]
pub async fn transcription_detail_handler<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> impl IntoResponse
where
    B: BlobStore + 'static,
{
    let Ok(id) = id.parse::<i64>() else {
        tracing::warn!(id = %id, "Lookup with non-numeric id");
        return (
            StatusCode::NOT_FOUND,
            envelope::failure(envelope::NOT_FOUND_MESSAGE, envelope::NOT_FOUND_CODE),
        )
            .into_response();
    };

    match state
        .transcription_service
        .lookup(RecordId::from_i64(id))
        .await
    {
        Ok(record) => {
            let message = format!(
                "Audio was transcribed on {}.",
                envelope::format_transcribed_at(record.created_at)
            );
            (
                StatusCode::OK,
                envelope::success_with_record(&message, &record),
            )
                .into_response()
        }
        Err(e) => {
            let (status, body) = envelope::pipeline_failure(&e);
            (status, body).into_response()
        }
    }
}
