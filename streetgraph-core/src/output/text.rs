use crate::model::Graph;

/// Renders the graph as the `V = {..}` / `E = {..}` listing.
///
/// Vertices are listed by identity, edges in canonical order; the separator
/// after the last edge is dropped.
pub fn render_text(graph: &Graph) -> String {
    let mut out = String::from("V = {\n");
    for (id, point) in graph.vertices().iter() {
        out.push_str(&format!("  {id}: {point}\n"));
    }
    out.push_str("}\nE = {\n");

    let edges: Vec<String> = graph
        .edges()
        .map(|edge| format!("  <{},{}>", edge.low(), edge.high()))
        .collect();
    if !edges.is_empty() {
        out.push_str(&edges.join(",\n"));
        out.push('\n');
    }
    out.push('}');
    out
}
