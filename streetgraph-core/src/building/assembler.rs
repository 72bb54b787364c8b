use std::collections::BTreeSet;

use hashbrown::HashSet;
use log::debug;

use crate::model::graph::{Edge, Graph, VertexId, VertexTable};
use crate::model::Point;

/// Builds the next graph from the simplified point sequences.
///
/// Vertices of `previous` that are no longer intersections are evicted and
/// their identities released; every other identity carries over unchanged.
/// Unbound points get the smallest free identity, in sequence order. An edge
/// joins consecutive points of a sequence when either is an intersection.
pub(super) fn assemble(
    previous: &VertexTable,
    sequences: &[Vec<Point>],
    intersections: HashSet<Point>,
) -> Graph {
    let mut vertices = previous.clone();
    let evicted = vertices.retain(|point| intersections.contains(point));
    debug!("Evicted {evicted} vertices that are no longer intersections");

    let mut edges = BTreeSet::new();
    for sequence in sequences {
        let mut prev: Option<(Point, VertexId)> = None;
        for &point in sequence {
            let id = vertices.bind(point);
            if let Some((prev_point, prev_id)) = prev
                && (intersections.contains(&point) || intersections.contains(&prev_point))
                && let Some(edge) = Edge::new(prev_id, id)
            {
                edges.insert(edge);
            }
            prev = Some((point, id));
        }
    }

    Graph {
        vertices,
        edges,
        intersections,
    }
}
