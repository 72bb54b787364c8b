// Re-export key components
pub use crate::building::{BuilderConfig, GraphBuilder, Simplification, build_graph};
pub use crate::error::{CoordinateOutOfRange, Error, StoreError};
pub use crate::geometry::intersect;
pub use crate::output::{render_text, to_geojson, to_geojson_string};
pub use crate::session::Session;

// Core types for the street graph
pub use crate::model::{Edge, Graph, Point, Street, StreetStore};
pub use crate::model::{MAX_COORDINATE, VertexId};
