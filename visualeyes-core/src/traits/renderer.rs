use std::path::Path;

use crate::config::RenderConfig;
use crate::errors::WorkflowError;
use crate::models::Artboard;

/// Rasterization capability supplied by the host design tool.
pub trait IArtboardRenderer: Send {
    /// Render an artboard to a raster file at the given path.
    fn render(
        &self,
        artboard: &Artboard,
        settings: &RenderConfig,
        out: &Path,
    ) -> Result<(), WorkflowError>;
}
