use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::BlobStore;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, transcribe_handler, transcription_detail_handler, transcriptions_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<B>(state: AppState<B>) -> Router
where
    B: BlobStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // The published paths carry a trailing slash; the bare form is routed
    // too since clients use both.
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/v1/audiofiles",
            get(transcriptions_handler).post(transcribe_handler::<B>),
        )
        .route(
            "/v1/audiofiles/",
            get(transcriptions_handler).post(transcribe_handler::<B>),
        )
        .route(
            "/v1/audiofiles/{id}",
            get(transcription_detail_handler::<B>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
