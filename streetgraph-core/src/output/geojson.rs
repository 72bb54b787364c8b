use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::model::{Edge, Graph, Point, VertexId};
use crate::Error;

/// Converts the graph to a `GeoJSON` `FeatureCollection`: a `Point` feature
/// per vertex followed by a `LineString` feature per edge.
pub fn to_geojson(graph: &Graph) -> Result<FeatureCollection, Error> {
    let mut features = Vec::with_capacity(graph.vertex_count() + graph.edge_count());

    for (id, point) in graph.vertices().iter() {
        features.push(create_vertex_feature(id, point, graph.is_intersection(&point))?);
    }

    for edge in graph.edges() {
        features.push(create_edge_feature(graph, edge)?);
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

pub fn to_geojson_string(graph: &Graph) -> Result<String, Error> {
    serde_json::to_string(&to_geojson(graph)?).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_vertex_feature(id: VertexId, point: Point, intersection: bool) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&geo::Point::from(point)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "vertex",
            "id": id,
            "intersection": intersection,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_edge_feature(graph: &Graph, edge: &Edge) -> Result<Feature, Error> {
    let endpoint = |id: VertexId| {
        graph
            .vertices()
            .point_of(id)
            .map(Coord::from)
            .ok_or_else(|| Error::GeoJsonError(format!("Edge refers to unknown vertex {id}")))
    };
    let line = LineString::new(vec![endpoint(edge.low())?, endpoint(edge.high())?]);
    let geometry = Geometry::new(GeoJsonValue::from(&line));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "edge",
            "from": edge.low(),
            "to": edge.high(),
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::{BuilderConfig, build_graph};
    use crate::model::StreetStore;

    fn crossing_graph() -> Graph {
        let mut store = StreetStore::new();
        store
            .add("main", vec![Point::new(0, 0), Point::new(10, 0)])
            .unwrap();
        store
            .add("cross", vec![Point::new(5, -5), Point::new(5, 5)])
            .unwrap();
        build_graph(&store, &Graph::default(), BuilderConfig::default())
    }

    #[test]
    fn one_feature_per_vertex_and_edge() {
        let collection = to_geojson(&crossing_graph()).unwrap();
        assert_eq!(collection.features.len(), 5 + 4);
    }

    #[test]
    fn intersection_flag_is_exported() {
        let json: serde_json::Value =
            serde_json::from_str(&to_geojson_string(&crossing_graph()).unwrap()).unwrap();
        let features = json["features"].as_array().unwrap();
        let flagged: Vec<_> = features
            .iter()
            .filter(|f| f["properties"]["intersection"] == json!(true))
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0]["geometry"]["coordinates"], json!([5.0, 0.0]));

        let edge = features
            .iter()
            .find(|f| f["properties"]["kind"] == "edge")
            .unwrap();
        assert_eq!(edge["geometry"]["type"], "LineString");
    }
}
