use std::path::Path;

use visualeyes_core::config::RenderConfig;
use visualeyes_core::errors::WorkflowError;
use visualeyes_core::models::Artboard;
use visualeyes_core::traits::IArtboardRenderer;

/// Bytes the stub renderer writes; a JPEG magic prefix so tests can tell
/// rendered files from fetched heatmaps.
pub const STUB_RENDITION: &[u8] = b"\xFF\xD8\xFFstub-rendition";

/// Renderer that writes a fixed byte pattern instead of rasterizing.
#[derive(Debug, Default)]
pub struct StubRenderer {
    /// When set, every render call fails with this message.
    pub fail_with: Option<String>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that always fails, for abort-path tests.
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
        }
    }
}

impl IArtboardRenderer for StubRenderer {
    fn render(
        &self,
        _artboard: &Artboard,
        _settings: &RenderConfig,
        out: &Path,
    ) -> Result<(), WorkflowError> {
        if let Some(reason) = &self.fail_with {
            return Err(WorkflowError::Render {
                reason: reason.clone(),
            });
        }
        std::fs::write(out, STUB_RENDITION).map_err(|e| WorkflowError::Io {
            path: out.display().to_string(),
            reason: e.to_string(),
        })
    }
}
