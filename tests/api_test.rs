use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine as _;
use base64::engine::general_purpose;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use scriba::application::ports::{
    AudioFileRepository, RecognitionConfig, RecognitionResult, SpeechService, SpeechServiceError,
};
use scriba::application::services::{Transcriber, TranscriptionService};
use scriba::domain::RecordId;
use scriba::infrastructure::persistence::MemoryAudioFileRepository;
use scriba::infrastructure::speech::{MOCK_CONFIDENCE, MOCK_TRANSCRIPT, MockSpeechService};
use scriba::infrastructure::storage::MemoryBlobStore;
use scriba::presentation::{AppState, create_router};

const BOUNDARY: &str = "XBOUNDARYX";

struct FailingSpeechService;

#[async_trait::async_trait]
impl SpeechService for FailingSpeechService {
    async fn recognize(
        &self,
        _audio: &[u8],
        _config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, SpeechServiceError> {
        Err(SpeechServiceError::RequestFailed(
            "connection refused".to_string(),
        ))
    }
}

struct TestApp {
    router: axum::Router,
    blob_store: Arc<MemoryBlobStore>,
    repository: Arc<MemoryAudioFileRepository>,
}

fn create_test_app(speech: Arc<dyn SpeechService>) -> TestApp {
    let blob_store = Arc::new(MemoryBlobStore::new());
    let repository = Arc::new(MemoryAudioFileRepository::new());

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&blob_store),
        Transcriber::new(speech),
        Arc::clone(&repository) as Arc<dyn AudioFileRepository>,
    ));

    let router = create_router(AppState {
        transcription_service,
    });

    TestApp {
        router,
        blob_store,
        repository,
    }
}

fn upload_request(uri: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_no_id_when_get_then_returns_connectivity_message() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert!(body["data"]["message"].is_string());
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn given_unknown_id_when_get_then_returns_not_found_failure() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["errors"]["error_code"], 1513606716u32);
    assert!(body["errors"]["message"].is_string());
}

#[tokio::test]
async fn given_non_numeric_id_when_get_then_returns_not_found_failure() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["errors"]["error_code"], 1513606716u32);
}

#[tokio::test]
async fn given_multipart_without_file_part_when_post_then_returns_no_file_failure() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"other\"\r\n\r\n");
    body.extend_from_slice(b"not a file");
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/audiofiles/")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["errors"]["error_code"], 1613606336u32);
    assert!(body["errors"]["message"].is_string());
}

#[tokio::test]
async fn given_non_multipart_body_when_post_then_returns_no_file_failure() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/audiofiles/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["errors"]["error_code"], 1613606336u32);
}

#[tokio::test]
async fn given_known_sample_when_post_then_returns_transcribed_record() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let content: Vec<u8> = (0..364068).map(|i| (i % 251) as u8).collect();
    let upload = general_purpose::STANDARD.encode(&content);

    let response = app
        .router
        .oneshot(upload_request("/v1/audiofiles/", "testing_track.flac", upload.as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["errors"], json!([]));

    let data = &body["data"];
    assert_eq!(data["message"], "Your file has been transcribed.");
    assert_eq!(data["id"], 1);
    assert_eq!(data["transcript"], MOCK_TRANSCRIPT);
    assert_eq!(data["confidence"], MOCK_CONFIDENCE);
    assert_eq!(data["rate hertz"], 44100);
    assert_eq!(data["no_of_alternatives"], 1);
    assert_eq!(data["file_size"], 364068);

    let file_name = data["file_name"].as_str().unwrap();
    assert!(file_name.starts_with("testing_track.flac"));
    assert!(file_name.len() > "testing_track.flac".len());
}

#[tokio::test]
async fn given_upload_when_post_then_file_size_is_decoded_length() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let content = vec![0xABu8; 1000];
    let upload = general_purpose::STANDARD.encode(&content);
    assert!(upload.len() > content.len());

    let response = app
        .router
        .oneshot(upload_request("/v1/audiofiles/", "clip.flac", upload.as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["file_size"], 1000);
}

#[tokio::test]
async fn given_persisted_record_when_get_then_round_trips_identically() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let content = vec![1u8; 512];
    let upload = general_purpose::STANDARD.encode(&content);

    let response = app
        .router
        .clone()
        .oneshot(upload_request("/v1/audiofiles/", "roundtrip.flac", upload.as_bytes()))
        .await
        .unwrap();
    let posted = response_json(response).await;

    let first = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first_bytes = first.into_body().collect().await.unwrap().to_bytes();
    let fetched: Value = serde_json::from_slice(&first_bytes).unwrap();

    for field in [
        "transcript",
        "confidence",
        "no_of_alternatives",
        "file_size",
        "file_name",
        "request_sent_at",
    ] {
        assert_eq!(fetched["data"][field], posted["data"][field], "{}", field);
    }

    // Absent further writes, repeated reads are byte-identical.
    let second = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second_bytes = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn given_speech_failure_when_post_then_returns_bad_gateway_and_persists_nothing() {
    let app = create_test_app(Arc::new(FailingSpeechService));

    let content = vec![2u8; 256];
    let upload = general_purpose::STANDARD.encode(&content);

    let response = app
        .router
        .oneshot(upload_request("/v1/audiofiles/", "doomed.flac", upload.as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["errors"]["error_code"], 1613606485u32);

    let stored = app
        .repository
        .find_by_id(RecordId::from_i64(1))
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn given_invalid_base64_when_post_then_returns_decode_failure_and_stores_nothing() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(upload_request(
            "/v1/audiofiles/",
            "garbage.flac",
            b"!!!this is not base64!!!",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["errors"]["error_code"], 1613606352u32);

    // Neither the staged copy nor a permanent blob survives a decode failure.
    assert_eq!(app.blob_store.object_count(), 0);
    let stored = app
        .repository
        .find_by_id(RecordId::from_i64(1))
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn given_bare_path_when_get_then_routes_without_trailing_slash() {
    let app = create_test_app(Arc::new(MockSpeechService));

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/audiofiles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
}
