use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use scriba::application::ports::{AudioFileRepository, SpeechService};
use scriba::application::services::{Transcriber, TranscriptionService};
use scriba::infrastructure::observability::{TracingConfig, init_tracing};
use scriba::infrastructure::persistence::{
    MemoryAudioFileRepository, PgAudioFileRepository, create_pool,
};
use scriba::infrastructure::speech::{GoogleSpeechService, MockSpeechService};
use scriba::infrastructure::storage::LocalBlobStore;
use scriba::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    let blob_store = Arc::new(LocalBlobStore::new(PathBuf::from(&settings.storage.root))?);

    let speech: Arc<dyn SpeechService> = match &settings.speech.api_key {
        Some(key) => Arc::new(GoogleSpeechService::new(&settings.speech.endpoint, key)),
        None => {
            tracing::warn!("SPEECH_API_KEY not set, serving canned transcription responses");
            Arc::new(MockSpeechService)
        }
    };

    let repository: Arc<dyn AudioFileRepository> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            PgAudioFileRepository::ensure_schema(&pool).await?;
            Arc::new(PgAudioFileRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping records in process memory");
            Arc::new(MemoryAudioFileRepository::new())
        }
    };

    let transcription_service = Arc::new(TranscriptionService::new(
        blob_store,
        Transcriber::new(speech),
        repository,
    ));

    let state = AppState {
        transcription_service,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
