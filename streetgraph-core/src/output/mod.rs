//! Graph renderers: the plain text listing and GeoJSON

mod geojson;
mod text;

pub use geojson::{to_geojson, to_geojson_string};
pub use text::render_text;
