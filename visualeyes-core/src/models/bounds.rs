use serde::{Deserialize, Serialize};

/// A layer's bounding box in artboard coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner of the box.
    pub fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Whether this box lies fully inside an artboard of the given extent.
    /// The artboard's own origin is (0, 0).
    pub fn contained_in(&self, artboard: &ArtboardExtent) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= artboard.width
            && self.y + self.height <= artboard.height
    }
}

/// Size of an artboard, the containing canvas for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtboardExtent {
    pub width: f64,
    pub height: f64,
}

impl ArtboardExtent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A position in artboard coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
