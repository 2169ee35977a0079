use base64::Engine as _;
use base64::engine::general_purpose;

/// Decodes the base64 transport encoding of an uploaded payload.
///
/// ASCII whitespace is stripped first. Any other deviation from the standard
/// alphabet fails outright; downstream size accounting and transcription
/// must never see truncated bytes.
pub fn decode_transfer_encoding(raw: &[u8]) -> Result<Vec<u8>, TransferDecodeError> {
    let compact: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(TransferDecodeError::Empty);
    }

    Ok(general_purpose::STANDARD.decode(compact)?)
}

#[derive(Debug, thiserror::Error)]
pub enum TransferDecodeError {
    #[error("payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("payload is empty")]
    Empty,
}
