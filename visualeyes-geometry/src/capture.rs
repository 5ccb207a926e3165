//! AOI capture: walk an artboard's rectangle layers, qualify each, and lift
//! the qualifying ones out of the scene as [`AreaOfInterest`] records.

use tracing::debug;

use visualeyes_core::config::AoiConfig;
use visualeyes_core::constants::AOI_LAYER_NAME;
use visualeyes_core::models::{AreaOfInterest, Artboard, NodeId};
use visualeyes_core::traits::ISceneGraph;

use crate::classify::{classify, AoiClassification};

/// A layer that did not qualify, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLayer {
    pub id: NodeId,
    pub classification: AoiClassification,
}

/// Outcome of one capture pass over an artboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureReport {
    /// Qualifying areas, in scene order. Their source layers have been
    /// removed from the scene.
    pub areas: Vec<AreaOfInterest>,
    /// Layers that were hidden and relabeled instead of captured.
    pub rejected: Vec<RejectedLayer>,
}

/// Collect the areas of interest under `artboard`.
///
/// Rectangle layers named `"AOI"` are classified; rejected layers are hidden
/// and relabeled in place (non-fatal, the pass continues), accepted layers
/// are removed from the scene so they do not appear in the rendition, and
/// returned as [`AreaOfInterest`] records carrying the layer's dominant fill
/// color.
pub fn collect_areas(
    scene: &mut dyn ISceneGraph,
    artboard: &Artboard,
    limits: &AoiConfig,
) -> CaptureReport {
    let mut report = CaptureReport::default();

    for layer in scene.rectangle_layers(&artboard.id) {
        if layer.name != AOI_LAYER_NAME {
            continue;
        }

        match classify(&layer.bounds, &artboard.extent, limits) {
            AoiClassification::RejectedTooSmall => {
                debug!(layer = %layer.id, "aoi rejected: below minimum size");
                scene.hide_and_rename(
                    &layer.id,
                    &format!(
                        "Too small (minimum {}x{})",
                        limits.min_width as i64, limits.min_height as i64
                    ),
                );
                report.rejected.push(RejectedLayer {
                    id: layer.id,
                    classification: AoiClassification::RejectedTooSmall,
                });
            }
            AoiClassification::RejectedOutOfBounds => {
                debug!(layer = %layer.id, "aoi rejected: off the artboard");
                scene.hide_and_rename(&layer.id, "Off the current artboard");
                report.rejected.push(RejectedLayer {
                    id: layer.id,
                    classification: AoiClassification::RejectedOutOfBounds,
                });
            }
            AoiClassification::Accepted => {
                let color = layer
                    .fill
                    .dominant_color()
                    .unwrap_or(&limits.branding_color)
                    .to_string();

                // The layer's visual role is taken over by the heatmap
                // overlay; remove it so it does not appear in the rendition.
                scene.remove_node(&layer.id);

                report
                    .areas
                    .push(AreaOfInterest::new(layer.id.0, color, layer.bounds));
            }
        }
    }

    debug!(
        captured = report.areas.len(),
        rejected = report.rejected.len(),
        "aoi capture complete"
    );
    report
}
