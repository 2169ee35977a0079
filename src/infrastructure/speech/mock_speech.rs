use crate::application::ports::{
    RecognitionAlternative, RecognitionConfig, RecognitionResult, SpeechService,
    SpeechServiceError,
};

/// Canned recognition result matching the reference testing track. Used by
/// tests and as the wiring fallback when no API key is configured.
pub struct MockSpeechService;

pub const MOCK_TRANSCRIPT: &str = "ok this is a testing track to see if you can hear me";
pub const MOCK_CONFIDENCE: f64 = 0.95;

#[async_trait::async_trait]
impl SpeechService for MockSpeechService {
    async fn recognize(
        &self,
        _audio: &[u8],
        _config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, SpeechServiceError> {
        Ok(vec![RecognitionResult {
            alternatives: vec![RecognitionAlternative {
                transcript: MOCK_TRANSCRIPT.to_string(),
                confidence: MOCK_CONFIDENCE,
            }],
        }])
    }
}
