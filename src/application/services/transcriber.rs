use std::sync::Arc;

use crate::application::ports::{
    RecognitionConfig, RecognitionResult, SpeechService, SpeechServiceError,
};
use crate::domain::{RATE_HERTZ, Transcription};

const ENCODING: &str = "FLAC";
const LANGUAGE_CODE: &str = "en-GB";

/// Invokes the speech service with the fixed recognition parameters and
/// reduces its results to a single `Transcription`.
///
/// Built once at startup; the recognition parameters never vary per request.
pub struct Transcriber {
    speech: Arc<dyn SpeechService>,
    config: RecognitionConfig,
}

impl Transcriber {
    pub fn new(speech: Arc<dyn SpeechService>) -> Self {
        Self {
            speech,
            config: RecognitionConfig {
                encoding: ENCODING,
                sample_rate_hertz: RATE_HERTZ,
                language_code: LANGUAGE_CODE,
            },
        }
    }

    pub async fn transcribe(&self, audio: &[u8]) -> Result<Transcription, SpeechServiceError> {
        let results = self.speech.recognize(audio, &self.config).await?;

        select_transcription(&results).ok_or_else(|| {
            SpeechServiceError::UnusableResponse("no transcription results returned".to_string())
        })
    }
}

/// Reduces ranked recognition results to the fields a record carries.
///
/// For each result only the first (highest-ranked) alternative is read,
/// together with that result's alternative count. When the service returns
/// several results, only the last one is retained.
pub fn select_transcription(results: &[RecognitionResult]) -> Option<Transcription> {
    let mut selected = None;

    for result in results {
        if let Some(best) = result.alternatives.first() {
            selected = Some(Transcription {
                transcript: best.transcript.clone(),
                confidence: best.confidence,
                no_of_alternatives: result.alternatives.len() as u32,
            });
        }
    }

    selected
}
