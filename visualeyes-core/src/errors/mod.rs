//! Error taxonomy. One enum per failure domain, aggregated into
//! [`VisualEyesError`]. Everything is recovered at the workflow boundary and
//! surfaced as a user notification; nothing propagates as a panic.

mod codec_error;
mod config_error;
mod credential_error;
mod prediction_error;
mod workflow_error;

pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use credential_error::CredentialError;
pub use prediction_error::PredictionError;
pub use workflow_error::WorkflowError;

/// Top-level error for the VisualEyes workspace.
#[derive(Debug, thiserror::Error)]
pub enum VisualEyesError {
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    #[error("image codec failed: {0}")]
    Codec(#[from] CodecError),

    #[error("credential store failed: {0}")]
    Credential(#[from] CredentialError),

    #[error("configuration invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("workflow aborted: {0}")]
    Workflow(#[from] WorkflowError),
}

/// Convenience alias used across the workspace.
pub type VisualEyesResult<T> = Result<T, VisualEyesError>;
