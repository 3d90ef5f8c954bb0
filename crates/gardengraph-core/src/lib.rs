//! # gardengraph Core
//!
//! Core data models, the document contract, error types and configuration
//! for the link-graph builder. This crate defines the canonical types that all
//! other gardengraph crates depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Graph output types (`Node`, `Edge`, `Graph`) and `DocumentMeta`
//! - [`document`] - The [`Document`] trait implemented by note sources
//! - [`error`] - Error type and Result alias
//! - [`config`] - Graph and vault configuration
//! - [`utils`] - JSON and path helpers
//!
//! ## Usage Examples
//!
//! ```
//! use gardengraph_core::prelude::*;
//!
//! let doc = InMemoryDocument::new("/q/", "p/q", "See [[x/y|Y]]");
//! assert_eq!(doc.slug(), "q");
//!
//! let config = GraphConfig::default().with_default_note_icon("1");
//! assert_eq!(config.home_tag, "gardenEntry");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod utils;

pub use config::*;
pub use document::{Document, InMemoryDocument};
pub use error::{Error, Result};
pub use models::*;
pub use utils::{path_segments, to_json_string};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{AppConfig, GraphConfig, VaultConfig};
    pub use crate::document::{Document, InMemoryDocument};
    pub use crate::error::{Error, Result};
    pub use crate::models::{DocumentMeta, Edge, Graph, NO_GROUP, Node};
}
