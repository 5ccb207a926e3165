//! Pure AOI qualification. No side effects; what happens to a rejected
//! layer is the caller's business.

use visualeyes_core::config::AoiConfig;
use visualeyes_core::models::{ArtboardExtent, Bounds};

/// Outcome of qualifying one rectangle layer as an AOI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AoiClassification {
    /// Qualifies; capture it.
    Accepted,
    /// Below the minimum size. Checked before containment, so a tiny
    /// off-artboard rectangle still reports as too small.
    RejectedTooSmall,
    /// Not fully contained in the artboard.
    RejectedOutOfBounds,
}

/// Classify a layer's bounding box against its artboard.
///
/// Rules in order, first match wins: minimum size, then containment,
/// then accepted.
pub fn classify(layer: &Bounds, artboard: &ArtboardExtent, limits: &AoiConfig) -> AoiClassification {
    if layer.width < limits.min_width || layer.height < limits.min_height {
        return AoiClassification::RejectedTooSmall;
    }
    if !layer.contained_in(artboard) {
        return AoiClassification::RejectedOutOfBounds;
    }
    AoiClassification::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artboard() -> ArtboardExtent {
        ArtboardExtent::new(1920.0, 1080.0)
    }

    #[test]
    fn accepts_minimum_sized_rectangle() {
        let layer = Bounds::new(0.0, 0.0, 70.0, 32.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::Accepted
        );
    }

    #[test]
    fn rejects_narrow_rectangle() {
        let layer = Bounds::new(100.0, 100.0, 69.9, 500.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::RejectedTooSmall
        );
    }

    #[test]
    fn rejects_short_rectangle() {
        let layer = Bounds::new(100.0, 100.0, 500.0, 31.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::RejectedTooSmall
        );
    }

    #[test]
    fn too_small_wins_over_out_of_bounds() {
        // Both rules violated; size is checked first.
        let layer = Bounds::new(-50.0, -50.0, 10.0, 10.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::RejectedTooSmall
        );
    }

    #[test]
    fn rejects_negative_origin() {
        let layer = Bounds::new(-1.0, 0.0, 200.0, 200.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::RejectedOutOfBounds
        );
    }

    #[test]
    fn rejects_overflow_past_right_edge() {
        let layer = Bounds::new(1900.0, 0.0, 100.0, 100.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::RejectedOutOfBounds
        );
    }

    #[test]
    fn accepts_rectangle_flush_with_edges() {
        let layer = Bounds::new(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(
            classify(&layer, &artboard(), &AoiConfig::default()),
            AoiClassification::Accepted
        );
    }

    #[test]
    fn honors_configured_minimums() {
        let limits = AoiConfig {
            min_width: 10.0,
            min_height: 10.0,
            ..AoiConfig::default()
        };
        let layer = Bounds::new(0.0, 0.0, 12.0, 12.0);
        assert_eq!(
            classify(&layer, &artboard(), &limits),
            AoiClassification::Accepted
        );
    }
}
