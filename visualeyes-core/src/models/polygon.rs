use serde::{Deserialize, Serialize};

use super::AreaOfInterest;

/// One corner of an AOI polygon, tagged with its sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonPoint {
    pub x: f64,
    pub y: f64,
    pub index: u32,
}

/// The wire form of an AOI: a clockwise four-point polygon starting at the
/// top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AoiPolygon {
    pub id: String,
    pub points: Vec<PolygonPoint>,
}

impl AoiPolygon {
    /// Build the wire polygon for an area: `(x,y,0)`, `(x+w,y,1)`,
    /// `(x+w,y+h,2)`, `(x,y+h,3)`.
    pub fn from_area(area: &AreaOfInterest) -> Self {
        let b = &area.bounds;
        Self {
            id: area.id.clone(),
            points: vec![
                PolygonPoint {
                    x: b.x,
                    y: b.y,
                    index: 0,
                },
                PolygonPoint {
                    x: b.x + b.width,
                    y: b.y,
                    index: 1,
                },
                PolygonPoint {
                    x: b.x + b.width,
                    y: b.y + b.height,
                    index: 2,
                },
                PolygonPoint {
                    x: b.x,
                    y: b.y + b.height,
                    index: 3,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bounds;

    #[test]
    fn polygon_winds_clockwise_from_top_left() {
        let area = AreaOfInterest::new("a1", "#3E21DE", Bounds::new(10.0, 20.0, 100.0, 50.0));
        let poly = AoiPolygon::from_area(&area);

        assert_eq!(poly.id, "a1");
        assert_eq!(poly.points.len(), 4);
        assert_eq!((poly.points[0].x, poly.points[0].y), (10.0, 20.0));
        assert_eq!((poly.points[1].x, poly.points[1].y), (110.0, 20.0));
        assert_eq!((poly.points[2].x, poly.points[2].y), (110.0, 70.0));
        assert_eq!((poly.points[3].x, poly.points[3].y), (10.0, 70.0));
        let indices: Vec<u32> = poly.points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
