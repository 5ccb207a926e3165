/// Failures raised by the workflow orchestrator itself.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("no artboard selected")]
    NoArtboardSelected,

    #[error("no api key has been set")]
    MissingApiKey,

    #[error("prediction response carries no score for area {id}")]
    MissingScore { id: String },

    #[error("artboard rendition failed: {reason}")]
    Render { reason: String },

    #[error("workspace i/o failed at {path}: {reason}")]
    Io { path: String, reason: String },
}
