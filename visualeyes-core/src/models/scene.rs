//! Host-agnostic scene model. The orchestrator never talks to a design-tool
//! SDK directly; it describes nodes with these types and lets the host
//! adapter realize them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ArtboardExtent, Bounds};

/// Opaque handle to a scene node, assigned by the host adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The selected top-level canvas a run operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct Artboard {
    pub id: NodeId,
    pub extent: ArtboardExtent,
}

/// Paint of a layer, resolved once at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// A single solid color, as a hex string.
    SolidColor { hex: String },
    /// A gradient; only the stop colors are kept.
    Gradient { stops: Vec<String> },
    /// No fill, or fill disabled on the layer.
    None,
}

impl Fill {
    /// The color this fill contributes to an AOI: a solid fill's color, a
    /// gradient's first stop, or `None` when there is nothing usable.
    pub fn dominant_color(&self) -> Option<&str> {
        match self {
            Fill::SolidColor { hex } => Some(hex),
            Fill::Gradient { stops } => stops.first().map(String::as_str),
            Fill::None => None,
        }
    }
}

/// Stroke applied to a rectangle node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Text styling for a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub font_size: f64,
    pub bold: bool,
}

/// A node the orchestrator asks the host to create.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Rectangle {
        name: String,
        extent: ArtboardExtent,
        fill: Fill,
        stroke: Option<Stroke>,
        /// Fill opacity, 0.0-1.0.
        opacity: f64,
    },
    Text {
        content: String,
        style: TextStyle,
    },
    /// A rectangle carrying a raster image read from a local file.
    ImageFill {
        name: String,
        extent: ArtboardExtent,
        path: PathBuf,
    },
}

/// What the orchestrator sees of an existing host rectangle layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSnapshot {
    pub id: NodeId,
    pub name: String,
    pub bounds: Bounds,
    pub fill: Fill,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_color_prefers_solid_then_gradient_stop() {
        let solid = Fill::SolidColor {
            hex: "#AABBCC".into(),
        };
        assert_eq!(solid.dominant_color(), Some("#AABBCC"));

        let gradient = Fill::Gradient {
            stops: vec!["#112233".into(), "#445566".into()],
        };
        assert_eq!(gradient.dominant_color(), Some("#112233"));

        assert_eq!(Fill::None.dominant_color(), None);
    }
}
