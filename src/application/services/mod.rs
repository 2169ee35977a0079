mod transcriber;
mod transcription_service;
mod transfer_decode;

pub use transcriber::{Transcriber, select_transcription};
pub use transcription_service::{PipelineError, TranscriptionService};
pub use transfer_decode::{TransferDecodeError, decode_transfer_encoding};
