/// Credential store errors.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("settings file i/o failed at {path}: {reason}")]
    Io { path: String, reason: String },
}
