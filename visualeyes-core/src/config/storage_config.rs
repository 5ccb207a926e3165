use serde::{Deserialize, Serialize};

/// Filesystem locations used by the workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the settings file. `None` resolves to
    /// `~/.visualeyes`.
    pub data_dir: Option<String>,
    /// Directory for rendered artboards and fetched heatmaps. `None`
    /// resolves to the system temp directory.
    pub work_dir: Option<String>,
}
