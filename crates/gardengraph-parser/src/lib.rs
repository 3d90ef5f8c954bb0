//! # gardengraph Parser
//!
//! Text scanning for the link-graph builder.
//!
//! This crate provides:
//! - [`extract_links`]: targets of `[[target|label]]` wikilinks and rendered
//!   `href="/target"` anchors, in that order, duplicates included
//! - [`frontmatter`]: YAML frontmatter extraction into [`gardengraph_core::DocumentMeta`]
//!
//! ## Quick Start
//!
//! ```
//! use gardengraph_parser::{extract_links, parse_document};
//!
//! let content = "---\ntitle: Index\n---\nStart at [[guides/setup.md|Setup]] or [[faq#top|FAQ]].";
//! let (meta, body) = parse_document(content).unwrap();
//! assert_eq!(meta.title.as_deref(), Some("Index"));
//! assert_eq!(extract_links(body), vec!["guides/setup", "faq"]);
//! ```
//!
//! ## Supported Notations
//!
//! - Wikilinks with a label: `[[Note|Alias]]`, `[[folder/Note.md|Alias]]`, `[[Note#Heading|Alias]]`
//! - Rendered site-relative anchors: `<a href="/folder/note/">`
//!
//! Plain `[[Note]]` without a pipe is deliberately not recognized.
//!
//! ## Performance
//!
//! - `std::sync::LazyLock` for compiled regex patterns
//! - Fast pre-filters skip regex when neither opener is present

pub mod frontmatter;
pub mod links;

pub use frontmatter::{extract_frontmatter, parse_document, parse_metadata};
pub use links::{
    LinkNotation, extract_links, extract_rendered_links, extract_wikilinks, normalize_target,
};
