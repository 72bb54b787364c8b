//! This module turns the street store into the simplified graph:
//! intersection discovery, point selection and vertex/edge assembly.

mod assembler;
mod builder;
mod config;
mod discovery;
mod selection;

pub use builder::{GraphBuilder, Simplification, build_graph};
pub use config::BuilderConfig;
