use serde::{Deserialize, Serialize};

/// Graph build settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Scan streets for intersections on the rayon pool
    pub parallel: bool,
}
