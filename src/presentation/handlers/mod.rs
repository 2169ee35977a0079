pub mod envelope;

mod health;
mod transcribe;
mod transcriptions;

pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use transcriptions::{transcription_detail_handler, transcriptions_handler};
