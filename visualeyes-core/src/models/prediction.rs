use serde::{Deserialize, Serialize};

use super::AreaScore;

/// A successful prediction: where to fetch the heatmap image and the
/// per-area attention scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Location of the server-generated heatmap image.
    pub heatmap_url: String,
    /// Scores for the areas submitted with the request. May be empty when
    /// the request carried no AOIs.
    pub areas: Vec<AreaScore>,
}
