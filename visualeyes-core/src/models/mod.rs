//! Shared data models: geometry, AOI records, scene nodes, prediction
//! results, and notifications.

mod area;
mod bounds;
mod notification;
mod polygon;
mod prediction;
mod scene;

pub use area::{AreaOfInterest, AreaScore};
pub use bounds::{ArtboardExtent, Bounds, Point};
pub use notification::{Notification, DEFAULT_DISPLAY_SECS};
pub use polygon::{AoiPolygon, PolygonPoint};
pub use prediction::Prediction;
pub use scene::{Artboard, Fill, LayerSnapshot, NodeId, NodeKind, Stroke, TextStyle};
