//! Image transport codec: binary buffer to data URL on the way out, raw
//! byte passthrough on the way back.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use visualeyes_core::errors::CodecError;

/// Encode an image buffer as a `data:<mime>;base64,<payload>` URL.
/// Standard alphabet, padded, no line wrapping.
pub fn encode_to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Copy a binary body into an owned buffer. Fails when the stream cannot be
/// read to its end (truncation, transport I/O error).
pub fn decode_binary(mut body: impl Read) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)
        .map_err(|e| CodecError::DecodeFailed {
            reason: e.to_string(),
        })?;
    Ok(buf)
}
