//! Planar geometry primitives

mod intersection;

pub use intersection::intersect;
