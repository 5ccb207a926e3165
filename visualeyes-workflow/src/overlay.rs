//! Scene construction for the results: the full-artboard heatmap layer and
//! the per-AOI overlay groups.

use std::path::Path;

use visualeyes_core::constants::HEATMAP_LAYER_NAME;
use visualeyes_core::models::{
    AreaOfInterest, Artboard, ArtboardExtent, Fill, NodeId, NodeKind, Point, Stroke, TextStyle,
};
use visualeyes_core::traits::ISceneGraph;

/// Size of the score badge behind the percentage text.
const SCORE_BADGE_WIDTH: f64 = 70.0;
const SCORE_BADGE_HEIGHT: f64 = 32.0;

/// Offset of the score text inside the badge.
const SCORE_TEXT_OFFSET_X: f64 = 12.0;
const SCORE_TEXT_OFFSET_Y: f64 = 22.0;

const SCORE_FONT_SIZE: f64 = 18.0;
const SCORE_TEXT_COLOR: &str = "#fff";

const BACKGROUND_STROKE_WIDTH: f64 = 4.0;
const BACKGROUND_FILL_OPACITY: f64 = 0.2;

/// Add the locked, artboard-sized heatmap image layer.
pub(crate) fn add_heatmap_layer(
    scene: &mut dyn ISceneGraph,
    artboard: &Artboard,
    image_path: &Path,
) -> NodeId {
    let id = scene.add_node(
        &artboard.id,
        NodeKind::ImageFill {
            name: HEATMAP_LAYER_NAME.to_string(),
            extent: artboard.extent,
            path: image_path.to_path_buf(),
        },
        Point::new(0.0, 0.0),
    );
    scene.lock(&id);
    id
}

/// Add one locked overlay group for a scored area: a translucent outlined
/// background over the area's original position, a badge in the area's
/// color, and the score text. Named `AOI <n>`, 1-based.
pub(crate) fn add_overlay_group(
    scene: &mut dyn ISceneGraph,
    artboard: &Artboard,
    area: &AreaOfInterest,
    index: usize,
) -> NodeId {
    let bounds = &area.bounds;
    let score = area.score.unwrap_or(0);

    let background = scene.add_node(
        &artboard.id,
        NodeKind::Rectangle {
            name: "Background".to_string(),
            extent: ArtboardExtent::new(bounds.width, bounds.height),
            fill: Fill::SolidColor {
                hex: area.color.clone(),
            },
            stroke: Some(Stroke {
                color: area.color.clone(),
                width: BACKGROUND_STROKE_WIDTH,
            }),
            opacity: BACKGROUND_FILL_OPACITY,
        },
        bounds.origin(),
    );

    let badge = scene.add_node(
        &artboard.id,
        NodeKind::Rectangle {
            name: "Score Background".to_string(),
            extent: ArtboardExtent::new(SCORE_BADGE_WIDTH, SCORE_BADGE_HEIGHT),
            fill: Fill::SolidColor {
                hex: area.color.clone(),
            },
            stroke: None,
            opacity: 1.0,
        },
        bounds.origin(),
    );

    let text = scene.add_node(
        &artboard.id,
        NodeKind::Text {
            content: format!("{score}%"),
            style: TextStyle {
                color: SCORE_TEXT_COLOR.to_string(),
                font_size: SCORE_FONT_SIZE,
                bold: true,
            },
        },
        Point::new(
            bounds.x + SCORE_TEXT_OFFSET_X,
            bounds.y + SCORE_TEXT_OFFSET_Y,
        ),
    );

    let group = scene.group(&[background, badge, text], &format!("AOI {}", index + 1));
    scene.lock(&group);
    group
}
