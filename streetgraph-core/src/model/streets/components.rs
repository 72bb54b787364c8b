//! Street polyline and its segments

use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::model::Point;

/// A named polyline. Point order defines the segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    /// Lower-cased street name
    pub name: String,
    /// Polyline vertices in traversal order
    pub points: Vec<Point>,
}

impl Street {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Consecutive point pairs of the polyline.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Polyline geometry for export and visualization
    pub fn geometry(&self) -> LineString<f64> {
        self.points.iter().copied().map(Coord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_pair_consecutive_points() {
        let street = Street::new(
            "weber",
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
        );
        let segments: Vec<_> = street.segments().collect();
        assert_eq!(
            segments,
            vec![
                (Point::new(0, 0), Point::new(1, 0)),
                (Point::new(1, 0), Point::new(1, 1)),
            ]
        );
        assert_eq!(street.segment_count(), 2);
    }

    #[test]
    fn single_point_street_has_no_segments() {
        let street = Street::new("stub", vec![Point::new(4, 4)]);
        assert_eq!(street.segments().count(), 0);
        assert_eq!(street.segment_count(), 0);
        assert_eq!(street.geometry().0.len(), 1);
    }
}
