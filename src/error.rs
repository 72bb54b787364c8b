use std::io;
use std::path::PathBuf;

use streetgraph_core::StoreError;
use thiserror::Error;

use crate::command::ParseError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Core(#[from] streetgraph_core::Error),
    #[error("Cannot read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("Invalid config: {0}")]
    ConfigParse(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Whether the command loop can report this and read the next line
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Store(_) | Self::Core(_))
    }
}
