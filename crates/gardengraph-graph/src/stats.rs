//! Summary statistics over a finished graph.

use gardengraph_core::Graph;
use serde::{Deserialize, Serialize};

/// Statistics about the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_links: usize,
    /// Nodes with no neighbors
    pub isolated_nodes: usize,
    pub hidden_nodes: usize,
    pub home_nodes: usize,
    /// Mean neighbor count per node
    pub average_degree: f64,
}

impl GraphStats {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph.nodes();
        let total_nodes = nodes.len();
        let degree_sum: usize = nodes.iter().map(|n| n.size).sum();

        let average_degree = if total_nodes > 0 {
            degree_sum as f64 / total_nodes as f64
        } else {
            0.0
        };

        Self {
            total_nodes,
            total_links: graph.edge_count(),
            isolated_nodes: nodes.iter().filter(|n| n.size == 0).count(),
            hidden_nodes: nodes.iter().filter(|n| n.hide).count(),
            home_nodes: nodes.iter().filter(|n| n.home).count(),
            average_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use gardengraph_core::{DocumentMeta, InMemoryDocument};

    #[tokio::test]
    async fn test_graph_stats() {
        let hidden = DocumentMeta {
            hide_in_graph: true,
            ..Default::default()
        };
        let docs = vec![
            InMemoryDocument::new("/a/", "a", "[[b|b]]"),
            InMemoryDocument::new("/b/", "b", ""),
            InMemoryDocument::new("/orphan/", "orphan", "").with_metadata(hidden),
        ];
        let graph = GraphBuilder::default().build(&docs).await.unwrap();

        let stats = GraphStats::from_graph(&graph);
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.total_links, 1);
        assert_eq!(stats.isolated_nodes, 1);
        assert_eq!(stats.hidden_nodes, 1);
        assert_eq!(stats.home_nodes, 0);
        assert!((stats.average_degree - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_graph_stats() {
        let stats = GraphStats::from_graph(&Graph::new("/"));
        assert_eq!(stats.total_nodes, 0);
        assert_eq!(stats.average_degree, 0.0);
    }
}
