use hashbrown::HashSet;
use log::{debug, info};

use super::assembler::assemble;
use super::config::BuilderConfig;
use super::discovery::{collect_intersections, discover_hits};
use super::selection::select_points;
use crate::model::{Graph, Point, Street, StreetStore};

/// Result of the simplification pass, before identities are assigned
#[derive(Debug, Clone, Default)]
pub struct Simplification {
    /// Points lying on two distinct streets
    pub intersections: HashSet<Point>,
    /// Surviving points of every street, in store order
    pub streets: Vec<(String, Vec<Point>)>,
}

impl Simplification {
    /// Surviving points of one street
    pub fn points_of(&self, name: &str) -> Option<&[Point]> {
        self.streets
            .iter()
            .find(|(street, _)| street == name)
            .map(|(_, points)| points.as_slice())
    }
}

/// Recomputes the street graph from a store
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    config: BuilderConfig,
}

impl GraphBuilder {
    pub const fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Finds every intersection and the points each street keeps.
    pub fn simplify(&self, store: &StreetStore) -> Simplification {
        let streets: Vec<&Street> = store.iter().collect();
        let segment_count: usize = streets.iter().map(|s| s.segment_count()).sum();

        debug!(
            "Scanning {} streets ({segment_count} segments) for intersections",
            streets.len()
        );

        let hits = discover_hits(&streets, self.config.parallel);
        let intersections = collect_intersections(&hits);

        let simplified = streets
            .iter()
            .zip(&hits)
            .map(|(street, street_hits)| {
                let points = select_points(street, street_hits, &intersections);
                debug!(
                    "Street \"{}\" keeps {} of {} points",
                    street.name,
                    points.len(),
                    street.points.len()
                );
                (street.name.clone(), points)
            })
            .collect();

        Simplification {
            intersections,
            streets: simplified,
        }
    }

    /// Full recomputation. Identities of `previous` vertices that are still
    /// intersections are preserved.
    pub fn build(&self, store: &StreetStore, previous: &Graph) -> Graph {
        let Simplification {
            intersections,
            streets,
        } = self.simplify(store);

        let sequences: Vec<Vec<Point>> = streets.into_iter().map(|(_, points)| points).collect();
        let graph = assemble(previous.vertices(), &sequences, intersections);

        info!(
            "Built street graph: {} vertices ({} intersections), {} edges",
            graph.vertex_count(),
            graph.intersection_count(),
            graph.edge_count()
        );

        graph
    }
}

/// Builds a graph with the given settings
pub fn build_graph(store: &StreetStore, previous: &Graph, config: BuilderConfig) -> Graph {
    GraphBuilder::new(config).build(store, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(i64, i64)]) -> Vec<Point> {
        points.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn simplify_reports_points_per_street() {
        let mut store = StreetStore::new();
        store.add("main", line(&[(0, 0), (10, 0)])).unwrap();
        store.add("cross", line(&[(5, -5), (5, 5)])).unwrap();
        store.add("lonely", line(&[(50, 50), (60, 60)])).unwrap();

        let result = GraphBuilder::default().simplify(&store);
        assert_eq!(result.intersections.len(), 1);
        assert_eq!(
            result.points_of("main").unwrap(),
            line(&[(0, 0), (5, 0), (10, 0)]).as_slice()
        );
        assert_eq!(
            result.points_of("cross").unwrap(),
            line(&[(5, -5), (5, 0), (5, 5)]).as_slice()
        );
        assert!(result.points_of("lonely").unwrap().is_empty());
        assert!(result.points_of("missing").is_none());
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let mut store = StreetStore::new();
        store.add("a", line(&[(0, 0), (10, 10), (20, 0)])).unwrap();
        store.add("b", line(&[(0, 5), (20, 5)])).unwrap();
        store.add("c", line(&[(10, -5), (10, 20)])).unwrap();

        let sequential = build_graph(&store, &Graph::default(), BuilderConfig::default());
        let parallel = build_graph(&store, &Graph::default(), BuilderConfig { parallel: true });

        let a: Vec<_> = sequential.vertices().iter().collect();
        let b: Vec<_> = parallel.vertices().iter().collect();
        assert_eq!(a, b);
        assert!(sequential.edges().eq(parallel.edges()));
    }
}
