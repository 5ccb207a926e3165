//! # visualeyes-workflow
//!
//! Sequences one prediction run end to end: qualify the AOI layers, render
//! the artboard, upload it, and apply the returned heatmap and scores back
//! onto the scene. Every failure is recovered here and surfaced as a user
//! notification.

mod engine;
mod messages;
mod overlay;
mod states;
mod tracing_setup;

pub use engine::{RunReport, WorkflowEngine};
pub use states::WorkflowState;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
