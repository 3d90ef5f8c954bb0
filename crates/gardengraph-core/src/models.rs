//! Core data models for the link graph.
//!
//! These types are designed to be:
//! - **Serializable**: field names follow the camelCase JSON layout consumed by graph renderers
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Cloneable**: a finished [`Graph`] is a plain value, safe to hand to other tasks

use crate::error::Result;
use crate::utils::to_json_string;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Group assigned to nodes whose path stem is too shallow to carry a folder.
pub const NO_GROUP: &str = "none";

/// Metadata attached to a document (typically its YAML frontmatter).
///
/// Every recognized key is optional. Unknown keys land in [`DocumentMeta::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(
        default,
        deserialize_with = "deserialize_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Explicit home flag (`dg-home: true`)
    #[serde(rename = "dg-home", default, deserialize_with = "deserialize_flag")]
    pub dg_home: bool,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(
        rename = "noteIcon",
        default,
        deserialize_with = "deserialize_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub note_icon: Option<String>,

    #[serde(rename = "hideInGraph", default, deserialize_with = "deserialize_flag")]
    pub hide_in_graph: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DocumentMeta {
    /// Whether the tag list contains `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// A document is home if flagged with `dg-home` or tagged with the entry-point tag.
    pub fn is_home(&self, home_tag: &str) -> bool {
        self.dg_home || self.has_tag(home_tag)
    }
}

/// Frontmatter flags are truthy in the loose sense authors expect:
/// `null` and `""` are false, any non-zero number or non-empty string is true.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

/// `tags: foo` and `tags: [foo, bar]` are both accepted.
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => vec![s],
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Scalars become their string form (`noteIcon: 2`, `title: 2024`); null,
/// sequences and mappings are treated as absent.
fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// A graph vertex representing one input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Position of the document in the input collection
    pub id: usize,
    pub title: String,
    /// Document address
    pub url: String,
    pub group: String,
    pub home: bool,
    /// Resolved, deduplicated link targets (fragments stripped)
    pub out_bound: Vec<String>,
    /// Addresses connected by any inbound or outbound link, in discovery order
    pub neighbors: Vec<String>,
    /// Addresses of nodes linking here, in discovery order
    pub back_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_icon: Option<String>,
    pub hide: bool,
    /// Number of neighbors
    pub size: usize,
}

/// A connection between two nodes, by node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// The finished link graph.
///
/// Nodes serialize as a JSON object keyed by address, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "GraphData")]
pub struct Graph {
    pub home_alias: String,
    #[serde(with = "nodes_by_address")]
    nodes: Vec<Node>,
    pub links: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphData {
    home_alias: String,
    #[serde(with = "nodes_by_address")]
    nodes: Vec<Node>,
    #[serde(default)]
    links: Vec<Edge>,
}

impl From<GraphData> for Graph {
    fn from(data: GraphData) -> Self {
        Graph::from_parts(data.home_alias, data.nodes, data.links)
    }
}

impl Graph {
    /// An empty graph whose home is `home_alias`.
    pub fn new(home_alias: impl Into<String>) -> Self {
        Self::from_parts(home_alias.into(), Vec::new(), Vec::new())
    }

    /// Assemble a graph from nodes in insertion order.
    ///
    /// Node addresses are expected to be unique; on a repeated address the
    /// last node is the one returned by [`Graph::node`].
    pub fn from_parts(home_alias: String, nodes: Vec<Node>, links: Vec<Edge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.url.clone(), pos))
            .collect();
        Self {
            home_alias,
            nodes,
            links,
            index,
        }
    }

    /// Look up a node by address.
    pub fn node(&self, address: &str) -> Option<&Node> {
        self.index.get(address).map(|&pos| &self.nodes[pos])
    }

    /// Look up a node by id.
    pub fn node_by_id(&self, id: usize) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json_string(self, "graph", pretty)
    }
}

mod nodes_by_address {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(nodes: &[Node], serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(nodes.iter().map(|node| (&node.url, node)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Vec<Node>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodesVisitor;

        impl<'de> Visitor<'de> for NodesVisitor {
            type Value = Vec<Node>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of address to node")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut nodes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((_address, node)) = map.next_entry::<String, Node>()? {
                    nodes.push(node);
                }
                Ok(nodes)
            }
        }

        deserializer.deserialize_map(NodesVisitor)
    }
}
