use serde::{Deserialize, Serialize};

use super::Bounds;

/// A designer-marked rectangular region flagged for individual attention
/// scoring. Captured from a qualifying scene layer; lives only for the
/// duration of one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    /// Unique id within one request, minted from the source layer.
    pub id: String,
    /// Dominant color of the source layer, as a hex string.
    pub color: String,
    /// Bounding box in artboard coordinates.
    pub bounds: Bounds,
    /// Attention score (0-100), populated after a successful prediction.
    pub score: Option<u32>,
}

impl AreaOfInterest {
    pub fn new(id: impl Into<String>, color: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            bounds,
            score: None,
        }
    }
}

/// A per-area score as returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    pub id: String,
    pub score: u32,
}
