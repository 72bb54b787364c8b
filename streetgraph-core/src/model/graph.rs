//! Vertex identity table, edge set and the published graph

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use hashbrown::{HashMap, HashSet};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::model::Point;

/// Positive vertex identity, reused after eviction
pub type VertexId = u32;

/// Undirected edge stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(VertexId, VertexId);

impl Edge {
    /// Canonical edge between two identities, `None` for a self-loop.
    pub fn new(a: VertexId, b: VertexId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub const fn low(&self) -> VertexId {
        self.0
    }

    pub const fn high(&self) -> VertexId {
        self.1
    }
}

/// Point ↔ identity mapping with a free-list of released identities.
///
/// Allocation always yields the smallest identity not currently bound:
/// released identities are kept in a min-heap and everything at or above
/// `next` has never been handed out.
#[derive(Debug, Clone)]
pub struct VertexTable {
    by_point: HashMap<Point, VertexId>,
    by_id: BTreeMap<VertexId, Point>,
    released: BinaryHeap<Reverse<VertexId>>,
    next: VertexId,
}

impl Default for VertexTable {
    fn default() -> Self {
        Self {
            by_point: HashMap::new(),
            by_id: BTreeMap::new(),
            released: BinaryHeap::new(),
            next: 1,
        }
    }
}

impl VertexTable {
    pub fn id_of(&self, point: &Point) -> Option<VertexId> {
        self.by_point.get(point).copied()
    }

    pub fn point_of(&self, id: VertexId) -> Option<Point> {
        self.by_id.get(&id).copied()
    }

    /// Identity of `point`, binding the smallest free one if unbound.
    pub fn bind(&mut self, point: Point) -> VertexId {
        if let Some(id) = self.id_of(&point) {
            return id;
        }
        let id = self.allocate();
        self.by_point.insert(point, id);
        self.by_id.insert(id, point);
        id
    }

    fn allocate(&mut self) -> VertexId {
        match self.released.pop() {
            Some(Reverse(id)) => id,
            None => {
                let id = self.next;
                self.next += 1;
                id
            }
        }
    }

    /// Drops every vertex whose point fails `keep` and releases its identity.
    /// Returns the number of evicted vertices.
    pub fn retain(&mut self, mut keep: impl FnMut(&Point) -> bool) -> usize {
        let evicted: Vec<(Point, VertexId)> = self
            .by_point
            .iter()
            .filter(|(point, _)| !keep(point))
            .map(|(point, id)| (*point, *id))
            .collect();
        for (point, id) in &evicted {
            self.by_point.remove(point);
            self.by_id.remove(id);
            self.released.push(Reverse(*id));
        }
        evicted.len()
    }

    /// `(id, point)` pairs ordered by identity
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.by_id.iter().map(|(id, point)| (*id, *point))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Topology node: a vertex identity and where it sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexNode {
    pub id: VertexId,
    pub geometry: Point,
}

/// The simplified street graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) vertices: VertexTable,
    pub(crate) edges: BTreeSet<Edge>,
    pub(crate) intersections: HashSet<Point>,
}

impl Graph {
    pub fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    /// Edges in canonical order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.edges.contains(&edge))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `point` was found on two distinct streets in the last build.
    pub fn is_intersection(&self, point: &Point) -> bool {
        self.intersections.contains(point)
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Undirected petgraph view of the graph, one node per vertex.
    pub fn topology(&self) -> UnGraph<VertexNode, ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: HashMap<VertexId, NodeIndex> = self
            .vertices
            .iter()
            .map(|(id, geometry)| (id, graph.add_node(VertexNode { id, geometry })))
            .collect();
        for edge in &self.edges {
            if let (Some(&a), Some(&b)) = (nodes.get(&edge.low()), nodes.get(&edge.high())) {
                graph.add_edge(a, b, ());
            }
        }
        graph
    }

    /// Number of connected components, isolated vertices included.
    pub fn component_count(&self) -> usize {
        connected_components(&self.topology())
    }
}
