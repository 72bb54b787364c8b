//! Application settings, read from an optional TOML file
//!
//! ```toml
//! format = "geojson"
//!
//! [builder]
//! parallel = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use streetgraph_core::BuilderConfig;

use crate::error::AppError;

/// How `g` prints the generated graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `V = {...}` / `E = {...}` listing
    #[default]
    Text,
    /// One GeoJSON FeatureCollection per line
    Geojson,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub format: OutputFormat,
    pub builder: BuilderConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this layout.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// # Errors
    ///
    /// Returns an error if `raw` does not deserialize into [`AppConfig`].
    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|err| AppError::ConfigParse(err.to_string()))
    }
}
