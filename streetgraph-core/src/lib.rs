//! Street intersection graphs.
//!
//! Streets are named polylines with integer coordinates. A build finds every
//! point where two streets meet, drops street points that are not next to
//! such a crossing, and assembles the rest into an undirected graph whose
//! vertex identities stay stable across rebuilds.
//!
//! ```text
//! StreetStore ──> discovery (segment × segment intersect)
//!             ──> selection (keep points adjacent to intersections)
//!             ──> assembler (identities, edges) ──> Graph
//! ```

pub mod building;
pub mod error;
pub mod geometry;
pub mod model;
pub mod output;
pub mod prelude;
pub mod session;

pub use building::{BuilderConfig, GraphBuilder, Simplification, build_graph};
pub use error::{CoordinateOutOfRange, Error, StoreError};
pub use geometry::intersect;
pub use model::{Edge, Graph, MAX_COORDINATE, Point, Street, StreetStore, VertexId};
pub use output::{render_text, to_geojson, to_geojson_string};
pub use session::Session;
