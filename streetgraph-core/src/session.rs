//! Session context owning the street store and the last built graph

use log::info;

use crate::building::{BuilderConfig, GraphBuilder};
use crate::error::StoreError;
use crate::model::{Graph, Point, StreetStore};

/// Street store plus the graph from the most recent [`Session::generate`].
///
/// Store mutations do not touch the graph; it is only replaced, as a whole,
/// when a new build finishes.
#[derive(Debug, Clone, Default)]
pub struct Session {
    streets: StreetStore,
    graph: Graph,
    builder: GraphBuilder,
}

impl Session {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            builder: GraphBuilder::new(config),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// See [`StreetStore::add`].
    pub fn add_street(&mut self, name: &str, points: Vec<Point>) -> Result<(), StoreError> {
        self.streets.add(name, points)
    }

    /// # Errors
    ///
    /// See [`StreetStore::change`].
    pub fn change_street(&mut self, name: &str, points: Vec<Point>) -> Result<(), StoreError> {
        self.streets.change(name, points)
    }

    /// # Errors
    ///
    /// See [`StreetStore::remove`].
    pub fn remove_street(&mut self, name: &str) -> Result<(), StoreError> {
        self.streets.remove(name).map(|_| ())
    }

    /// Recomputes the graph from the current streets and publishes it.
    pub fn generate(&mut self) -> &Graph {
        let graph = self.builder.build(&self.streets, &self.graph);
        info!(
            "Generated graph for {} streets: {} connected components",
            self.streets.len(),
            graph.component_count()
        );
        self.graph = graph;
        &self.graph
    }

    /// Graph from the last `generate`, empty before the first one.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn streets(&self) -> &StreetStore {
        &self.streets
    }
}
