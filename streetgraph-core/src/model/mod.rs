//! Data model for the street graph
//!
//! Contains the point representation, the street store and the
//! vertex/edge graph produced by a build.

pub mod graph;
pub mod point;
pub mod streets;

pub use graph::{Edge, Graph, VertexId};
pub use point::{MAX_COORDINATE, Point};
pub use streets::{Street, StreetStore};
