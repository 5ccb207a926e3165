use serde::{Deserialize, Serialize};

use super::defaults;

/// Artboard rendition settings handed to the host renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Raster format, e.g. "jpg".
    pub format: String,
    /// Export scale factor.
    pub scale: f64,
    /// Export quality, 1-100.
    pub quality: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: defaults::DEFAULT_RENDER_FORMAT.to_string(),
            scale: defaults::DEFAULT_RENDER_SCALE,
            quality: defaults::DEFAULT_RENDER_QUALITY,
        }
    }
}
