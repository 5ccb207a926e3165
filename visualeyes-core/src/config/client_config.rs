use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction service client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the prediction service.
    pub endpoint_url: String,
    /// Request timeout in seconds. Applies to the upload and the heatmap
    /// fetch; there is no retry on expiry.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: defaults::DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
