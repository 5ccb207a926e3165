/// Where a run currently stands. One suspension point per forward
/// transition; `Aborted` is reachable from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Nothing running.
    Idle,
    /// Qualifying AOI layers.
    Validating,
    /// Rasterizing the artboard.
    Rendering,
    /// Prediction request in flight. No cancellation path; once submitted
    /// the run completes or fails.
    Uploading,
    /// Fetching the heatmap and mutating the scene.
    Applying,
    /// Run finished; the scene carries the results.
    Done,
    /// Run ended early; partial scene mutations are not rolled back.
    Aborted,
}
