//! # visualeyes-geometry
//!
//! Decides which rectangle layers qualify as areas of interest, and captures
//! qualifying layers out of the scene as [`AreaOfInterest`] records.
//!
//! [`AreaOfInterest`]: visualeyes_core::models::AreaOfInterest

mod capture;
mod classify;

pub use capture::{collect_areas, CaptureReport, RejectedLayer};
pub use classify::{classify, AoiClassification};
