//! User-facing notification texts. One distinct message per failure kind;
//! everything unexpected shares the generic one.

use visualeyes_core::config::AoiConfig;
use visualeyes_core::errors::{PredictionError, VisualEyesError, WorkflowError};
use visualeyes_geometry::AoiClassification;

pub(crate) const NO_ARTBOARD: &str = "Please select an artboard first";
pub(crate) const MISSING_KEY: &str = "Please set your API key first";
pub(crate) const GENERATING: &str = "Your heatmap is generating...";
pub(crate) const DONE: &str = "Done! Your heatmap is ready.";
pub(crate) const INVALID_KEY: &str = "Your API key is not valid";
pub(crate) const UPGRADE_REQUIRED: &str =
    "This feature needs an upgraded account. Visit https://www.visualeyes.design for more information.";
pub(crate) const QUOTA_EXCEEDED: &str = "Your heatmaps limit has been exceeded";
pub(crate) const UNKNOWN: &str = "Something went wrong while generating your heatmap";

/// The notice shown for a failed run.
pub(crate) fn for_error(err: &VisualEyesError) -> String {
    match err {
        VisualEyesError::Workflow(WorkflowError::NoArtboardSelected) => NO_ARTBOARD.to_string(),
        VisualEyesError::Workflow(WorkflowError::MissingApiKey) => MISSING_KEY.to_string(),
        VisualEyesError::Prediction(PredictionError::InvalidKey) => INVALID_KEY.to_string(),
        VisualEyesError::Prediction(PredictionError::UpgradeRequired) => {
            UPGRADE_REQUIRED.to_string()
        }
        VisualEyesError::Prediction(PredictionError::QuotaExceeded) => QUOTA_EXCEEDED.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// The notice shown when a single AOI layer is rejected. Non-fatal.
pub(crate) fn for_rejection(classification: AoiClassification, limits: &AoiConfig) -> String {
    match classification {
        AoiClassification::RejectedTooSmall => format!(
            "One of your rectangles is not big enough (minimum {}x{} pixels)",
            limits.min_width as i64, limits.min_height as i64
        ),
        AoiClassification::RejectedOutOfBounds => {
            "One of your rectangles is outside the current artboard".to_string()
        }
        AoiClassification::Accepted => String::new(),
    }
}
