/// Image codec errors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("response body could not be read as binary: {reason}")]
    DecodeFailed { reason: String },
}
