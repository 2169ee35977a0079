mod google_speech;
mod mock_speech;

pub use google_speech::GoogleSpeechService;
pub use mock_speech::{MOCK_CONFIDENCE, MOCK_TRANSCRIPT, MockSpeechService};
