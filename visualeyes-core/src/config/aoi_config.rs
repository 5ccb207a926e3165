use serde::{Deserialize, Serialize};

use super::defaults;

/// Area-of-interest qualification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AoiConfig {
    /// Minimum AOI width in pixels.
    pub min_width: f64,
    /// Minimum AOI height in pixels.
    pub min_height: f64,
    /// Fallback color for AOIs whose source layer has no usable fill.
    pub branding_color: String,
}

impl Default for AoiConfig {
    fn default() -> Self {
        Self {
            min_width: defaults::DEFAULT_MIN_AOI_WIDTH,
            min_height: defaults::DEFAULT_MIN_AOI_HEIGHT,
            branding_color: defaults::DEFAULT_BRANDING_COLOR.to_string(),
        }
    }
}
