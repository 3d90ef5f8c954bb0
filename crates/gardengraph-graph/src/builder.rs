//! Graph construction from a document collection.
//!
//! A build runs in two passes over the input:
//!
//! 1. **Node assembly**: each document body is read (one awaited read per
//!    document, strictly in input order), its links are extracted, and a node
//!    is created with `id` = position in the input. The `path_stem -> address`
//!    table and the home alias are filled in the same pass.
//! 2. **Resolution**: every raw link is resolved through the path table
//!    (falling back to the raw target itself), stripped of its fragment and
//!    deduplicated. Targets that hit an existing node produce neighbor and
//!    backlink entries plus one edge.
//!
//! Neighbor and backlink sets keep discovery order and become plain lists at
//! the end, where `size` is set to the neighbor count.

use gardengraph_core::path_segments;
use gardengraph_core::prelude::*;
use gardengraph_parser::extract_links;
use std::collections::{HashMap, HashSet};

/// Builds a [`Graph`] from documents using an explicit [`GraphConfig`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

/// Insertion-ordered set of addresses
#[derive(Debug, Default)]
struct AddressSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl AddressSet {
    fn insert(&mut self, address: &str) -> bool {
        if self.seen.contains(address) {
            return false;
        }
        self.seen.insert(address.to_string());
        self.order.push(address.to_string());
        true
    }

    fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// A node under construction
#[derive(Debug)]
struct NodeDraft {
    node: Node,
    raw_links: Vec<String>,
    neighbors: AddressSet,
    back_links: AddressSet,
}

impl NodeDraft {
    fn finish(self) -> Node {
        let mut node = self.node;
        node.neighbors = self.neighbors.into_vec();
        node.back_links = self.back_links.into_vec();
        node.size = node.neighbors.len();
        node
    }
}

impl GraphBuilder {
    /// Create a builder
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Get the builder configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build the graph for `documents`.
    ///
    /// Fails only when a document body cannot be read; that error is returned as is.
    pub async fn build<'a, I, D>(&self, documents: I) -> Result<Graph>
    where
        I: IntoIterator<Item = &'a D>,
        D: Document + ?Sized + 'a,
    {
        let mut home_alias = self.config.root_alias.clone();
        let mut drafts: Vec<NodeDraft> = Vec::new();
        // address -> index into drafts
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut stem_urls: HashMap<String, String> = HashMap::new();

        for (idx, doc) in documents.into_iter().enumerate() {
            let address = doc.address();
            let meta = doc.metadata();

            let body = match doc.read().await {
                Ok(body) => body,
                Err(e) => {
                    log::error!("Failed to read document {}: {}", address, e);
                    return Err(e);
                }
            };
            let raw_links = extract_links(&body);
            log::debug!("{}: {} raw links", address, raw_links.len());

            let home = meta.is_home(&self.config.home_tag);
            let node = Node {
                id: idx,
                title: meta
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| doc.slug().to_string()),
                url: address.to_string(),
                group: group_for(doc.path_stem()),
                home,
                out_bound: Vec::new(),
                neighbors: Vec::new(),
                back_links: Vec::new(),
                note_icon: meta
                    .note_icon
                    .clone()
                    .filter(|icon| !icon.is_empty())
                    .or_else(|| self.config.default_note_icon.clone()),
                hide: meta.hide_in_graph,
                size: 0,
            };
            let draft = NodeDraft {
                node,
                raw_links,
                neighbors: AddressSet::default(),
                back_links: AddressSet::default(),
            };

            match positions.get(address) {
                Some(&pos) => {
                    log::warn!("Duplicate document address {}, keeping the later one", address);
                    drafts[pos] = draft;
                }
                None => {
                    positions.insert(address.to_string(), drafts.len());
                    drafts.push(draft);
                }
            }

            stem_urls.insert(doc.path_stem().to_string(), address.to_string());

            if home {
                home_alias = address.to_string();
            }
        }

        let mut links = Vec::new();
        for i in 0..drafts.len() {
            let mut resolved = AddressSet::default();
            for raw in &drafts[i].raw_links {
                let target = stem_urls.get(raw).map_or(raw.as_str(), String::as_str);
                let target = target.split('#').next().unwrap_or_default();
                resolved.insert(target);
            }
            let out_bound = resolved.into_vec();

            let source_url = drafts[i].node.url.clone();
            let source_id = drafts[i].node.id;

            for target in &out_bound {
                let Some(&j) = positions.get(target) else {
                    log::debug!("Unresolved link {} -> {}", source_url, target);
                    continue;
                };
                let target_url = drafts[j].node.url.clone();
                let target_id = drafts[j].node.id;

                drafts[j].neighbors.insert(&source_url);
                drafts[j].back_links.insert(&source_url);
                drafts[i].neighbors.insert(&target_url);
                links.push(Edge::new(source_id, target_id));
            }

            drafts[i].node.out_bound = out_bound;
        }

        let nodes: Vec<Node> = drafts.into_iter().map(NodeDraft::finish).collect();

        log::info!(
            "Link graph built: {} nodes, {} links, home {}",
            nodes.len(),
            links.len(),
            home_alias
        );

        Ok(Graph::from_parts(home_alias, nodes, links))
    }
}

/// Build a graph with the given configuration.
pub async fn build_graph<'a, I, D>(documents: I, config: &GraphConfig) -> Result<Graph>
where
    I: IntoIterator<Item = &'a D>,
    D: Document + ?Sized + 'a,
{
    GraphBuilder::new(config.clone()).build(documents).await
}

/// Second-to-last path segment when the stem has at least three segments.
fn group_for(path_stem: &str) -> String {
    let parts = path_segments(path_stem);
    if parts.len() >= 3 {
        parts[parts.len() - 2].to_string()
    } else {
        NO_GROUP.to_string()
    }
}
