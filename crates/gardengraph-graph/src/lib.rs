//! # Link Graph Construction
//!
//! Builds the undirected link graph of a document collection.
//!
//! Provides:
//! - [`GraphBuilder`]: two-pass build (node assembly, then link resolution)
//! - [`GraphStats`]: node/link counts, isolated and hidden nodes, average degree
//! - [`to_petgraph`]: export to `petgraph` for further analysis
//!
//! ## Quick Start
//!
//! ```
//! use gardengraph_graph::prelude::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let docs = vec![
//!     InMemoryDocument::new("/y/", "x/y", "See [[p/q|Label]]"),
//!     InMemoryDocument::new("/q/", "p/q", "A leaf"),
//! ];
//! let graph = GraphBuilder::new(GraphConfig::default()).build(&docs).await.unwrap();
//!
//! assert_eq!(graph.node("/y/").unwrap().out_bound, vec!["/q/"]);
//! assert_eq!(graph.node("/q/").unwrap().back_links, vec!["/y/"]);
//! assert_eq!(graph.links.len(), 1);
//! # });
//! ```
//!
//! ## Core Concepts
//!
//! - **Nodes**: one per document, `id` = input position
//! - **Edges**: one per resolved outbound link, by node id; repeated pairs are kept
//! - **Neighbors**: linked in either direction; `size` is their count
//! - **Home alias**: address of the last document flagged home, else the configured root
//!
//! ## Performance Characteristics
//!
//! - Build: O(total body length + total links)
//! - Reads are awaited one document at a time, in input order

pub mod builder;
pub mod export;
pub mod stats;

pub use builder::{GraphBuilder, build_graph};
pub use export::to_petgraph;
pub use gardengraph_core::prelude::*;
pub use stats::GraphStats;

pub mod prelude {
    pub use crate::builder::{GraphBuilder, build_graph};
    pub use crate::export::to_petgraph;
    pub use crate::stats::GraphStats;
    pub use gardengraph_core::prelude::*;
}
