use async_trait::async_trait;

/// Parameters declared to the speech service. These describe what the
/// service should assume about the audio, not what the audio actually is.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    pub encoding: &'static str,
    pub sample_rate_hertz: u32,
    pub language_code: &'static str,
}

/// One candidate interpretation of the audio.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: f64,
}

/// One recognition result (e.g. an utterance segment), holding its
/// alternatives ranked best first.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
}

/// Remote speech-recognition service.
#[async_trait]
pub trait SpeechService: Send + Sync {
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, SpeechServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("unusable response: {0}")]
    UnusableResponse(String),
}
