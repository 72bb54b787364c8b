//! Command-line front end for `streetgraph_core`.
//!
//! Reads street commands from standard input, one per line, and prints the
//! intersection graph on every `g`.

pub mod command;
pub mod config;
pub mod error;
pub mod repl;

pub use command::{Command, ParseError, parse_line};
pub use config::{AppConfig, OutputFormat};
pub use error::AppError;
pub use repl::Repl;
