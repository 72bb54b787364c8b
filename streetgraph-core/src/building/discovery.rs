use hashbrown::HashSet;
use log::trace;
use rayon::prelude::*;

use crate::geometry::intersect;
use crate::model::{Point, Street};

/// Intersection hits for every segment of one street, indexed by segment.
pub(super) type SegmentHits = Vec<Vec<Point>>;

/// Scan every street against all other streets.
///
/// The outer vector follows the order of `streets`. With `parallel` set the
/// streets are scanned on the rayon pool; the collected order is the same.
pub(super) fn discover_hits(streets: &[&Street], parallel: bool) -> Vec<SegmentHits> {
    if parallel {
        (0..streets.len())
            .into_par_iter()
            .map(|idx| street_hits(streets, idx))
            .collect()
    } else {
        (0..streets.len())
            .map(|idx| street_hits(streets, idx))
            .collect()
    }
}

/// Hits of each segment of `streets[source_idx]` against every other street.
fn street_hits(streets: &[&Street], source_idx: usize) -> SegmentHits {
    let source = streets[source_idx];

    source
        .segments()
        .map(|(start, end)| {
            let mut hits = Vec::new();
            for (other_idx, other) in streets.iter().enumerate() {
                // Skip self-intersections
                if other_idx == source_idx {
                    continue;
                }
                for (other_start, other_end) in other.segments() {
                    hits.extend(intersect(start, end, other_start, other_end));
                }
            }
            if !hits.is_empty() {
                trace!(
                    "Segment {start}-{end} of \"{}\" meets other streets at {} points",
                    source.name,
                    hits.len()
                );
            }
            hits
        })
        .collect()
}

/// Union of all hits: the intersection set.
pub(super) fn collect_intersections(hits: &[SegmentHits]) -> HashSet<Point> {
    hits.iter().flatten().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street(name: &str, points: &[(i64, i64)]) -> Street {
        Street::new(name, points.iter().copied().map(Point::from).collect())
    }

    #[test]
    fn hits_are_grouped_per_segment() {
        let a = street("a", &[(0, 0), (10, 0), (10, 10)]);
        let b = street("b", &[(5, -5), (5, 5)]);
        let c = street("c", &[(8, 5), (12, 5)]);
        let streets = [&a, &b, &c];

        let hits = discover_hits(&streets, false);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0], vec![vec![Point::new(5, 0)], vec![Point::new(10, 5)]]);
        assert_eq!(hits[1], vec![vec![Point::new(5, 0)]]);
        assert_eq!(hits[2], vec![vec![Point::new(10, 5)]]);
    }

    #[test]
    fn street_does_not_intersect_itself() {
        // self-crossing figure eight
        let a = street("a", &[(0, 0), (4, 4), (4, 0), (0, 4)]);
        let hits = discover_hits(&[&a], false);
        assert!(hits[0].iter().all(Vec::is_empty));
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let a = street("a", &[(0, 0), (10, 10), (20, 0)]);
        let b = street("b", &[(0, 10), (20, 10)]);
        let c = street("c", &[(3, -2), (3, 12), (15, 12), (15, -2)]);
        let streets = [&a, &b, &c];
        assert_eq!(discover_hits(&streets, true), discover_hits(&streets, false));
    }

    #[test]
    fn intersections_are_the_union_of_hits() {
        let hits = vec![
            vec![vec![Point::new(1, 1), Point::new(2, 2)], vec![]],
            vec![vec![Point::new(2, 2)]],
        ];
        let set = collect_intersections(&hits);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::new(1, 1)));
    }
}
