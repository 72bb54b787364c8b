use hashbrown::HashSet;
use itertools::Itertools;

use crate::model::{Point, Street};

/// Points of `street` that survive simplification, in traversal order.
///
/// A segment start is kept when it touches the intersection set, when the
/// segment end does, when the segment carries interior crossings, or when
/// the previously kept point is an intersection. Interior crossings follow
/// the start point ordered by distance from it; equal distances keep
/// discovery order. The final point is kept after an intersection.
pub(super) fn select_points(
    street: &Street,
    segment_hits: &[Vec<Point>],
    intersections: &HashSet<Point>,
) -> Vec<Point> {
    let is_intersection = |point: &Point| intersections.contains(point);
    let mut kept: Vec<Point> = Vec::new();

    for ((start, end), hits) in street.segments().zip(segment_hits) {
        let mut interior: Vec<Point> = hits
            .iter()
            .copied()
            .filter(|hit| *hit != start && *hit != end)
            .unique()
            .collect();

        if is_intersection(&start)
            || is_intersection(&end)
            || !interior.is_empty()
            || kept.last().is_some_and(is_intersection)
        {
            kept.push(start);
        }

        // stable sort, ties stay in discovery order
        interior.sort_by_key(|hit| hit.distance_squared(&start));
        kept.extend(interior);
    }

    if kept.last().is_some_and(is_intersection)
        && let Some(&last) = street.points.last()
    {
        kept.push(last);
    }

    kept
}
