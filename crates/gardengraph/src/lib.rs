//! # gardengraph
//!
//! Link graph builder for digital gardens.
//!
//! Scans a notes directory, extracts `[[target|label]]` wikilinks and rendered
//! `href="/..."` anchors from every note, and builds a graph of nodes,
//! neighbors, backlinks and edges ready to be serialized for a graph view.
//!
//! The pieces live in their own crates and are re-exported here:
//! - `gardengraph-core`: data model, [`Document`] trait, configuration, errors
//! - `gardengraph-parser`: link and frontmatter extraction
//! - `gardengraph-graph`: [`GraphBuilder`], [`GraphStats`], petgraph export
//! - `gardengraph-vault`: [`NoteCollection`], the filesystem document source

use std::fmt;
use std::str::FromStr;
use tracing::instrument;

pub use gardengraph_core::prelude::*;
pub use gardengraph_graph::{GraphBuilder, GraphStats, build_graph, to_petgraph};
pub use gardengraph_vault::{NoteCollection, NoteFile};

/// Log output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format '{}'. Valid options: human, json",
                s
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Scan the configured notes directory and build its link graph.
#[instrument(skip(config), fields(root = ?config.vault.root), name = "export_graph")]
pub async fn export_graph(config: &AppConfig) -> Result<Graph> {
    let notes = NoteCollection::load(&config.vault).await?;
    if notes.is_empty() {
        log::warn!("No notes found in {}", config.vault.root.display());
    }

    let builder = GraphBuilder::new(config.graph.clone());
    notes.build_graph(&builder).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
