//! Conversion to a petgraph structure for downstream analysis.

use gardengraph_core::Graph;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Convert to an undirected petgraph graph.
///
/// Node weights are addresses, added in node insertion order. Every edge of
/// [`Graph::links`] is carried over, including repeated pairs.
pub fn to_petgraph(graph: &Graph) -> UnGraph<String, ()> {
    let mut out = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
    let mut by_id: HashMap<usize, NodeIndex> = HashMap::with_capacity(graph.node_count());

    for node in graph.nodes() {
        by_id.insert(node.id, out.add_node(node.url.clone()));
    }

    for edge in &graph.links {
        if let (Some(&a), Some(&b)) = (by_id.get(&edge.source), by_id.get(&edge.target)) {
            out.add_edge(a, b, ());
        }
    }

    out
}
