use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose;
use serde::Deserialize;

use crate::application::ports::{
    RecognitionAlternative, RecognitionConfig, RecognitionResult, SpeechService,
    SpeechServiceError,
};

/// Google Cloud Speech-to-Text over its synchronous `speech:recognize`
/// REST endpoint.
pub struct GoogleSpeechService {
    endpoint: String,
    api_key: String,
}

impl GoogleSpeechService {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternatives: Vec<RecognizeAlternative>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: f64,
}

#[async_trait]
impl SpeechService for GoogleSpeechService {
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, SpeechServiceError> {
        // The session handle lives for exactly this call; dropping it on any
        // exit path below releases the connection.
        let client = reqwest::Client::new();
        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let body = serde_json::json!({
            "config": {
                "encoding": config.encoding,
                "sampleRateHertz": config.sample_rate_hertz,
                "languageCode": config.language_code,
            },
            "audio": {
                "content": general_purpose::STANDARD.encode(audio),
            },
        });

        tracing::debug!(endpoint = %self.endpoint, bytes = audio.len(), "Sending audio for recognition");

        let response = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechServiceError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechServiceError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechServiceError::UnusableResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            results = parsed.results.len(),
            "Speech recognition completed"
        );

        Ok(parsed
            .results
            .into_iter()
            .map(|r| RecognitionResult {
                alternatives: r
                    .alternatives
                    .into_iter()
                    .map(|a| RecognitionAlternative {
                        transcript: a.transcript,
                        confidence: a.confidence,
                    })
                    .collect(),
            })
            .collect())
    }
}
