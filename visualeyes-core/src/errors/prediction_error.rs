/// Failures of the remote prediction call, keyed to the service's status
/// codes and envelope.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("api key rejected by the prediction service")]
    InvalidKey,

    #[error("account upgrade required for this feature")]
    UpgradeRequired,

    #[error("heatmap quota exceeded")]
    QuotaExceeded,

    #[error("prediction service error: {reason}")]
    Service { reason: String },

    #[error("duplicate area id in request: {id}")]
    DuplicateAreaId { id: String },
}
