//! # gardengraph Vault
//!
//! Filesystem document source for the link-graph builder.
//!
//! This crate provides:
//! - Note discovery under a directory (`walkdir`), honoring excluded names,
//!   allowed extensions and a size limit from [`VaultConfig`]
//! - [`NoteFile`], a [`Document`] whose metadata comes from YAML frontmatter
//!   and whose body is read from disk on every [`Document::read`]
//!
//! ## Addresses and path stems
//!
//! For `<root>/rust/ownership.md`:
//! - path stem: `rust/ownership`
//! - slug: `ownership`
//! - address: frontmatter `permalink` if set, else `url_prefix + stem + "/"`
//!   (`/notes/rust/ownership/` with the default prefix)
//!
//! ## Quick Start
//!
//! ```no_run
//! use gardengraph_vault::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = VaultConfig::builder("/path/to/notes").build()?;
//!     let notes = NoteCollection::load(&config).await?;
//!     let graph = notes.build_graph(&GraphBuilder::default()).await?;
//!     println!("{}", graph.to_json(true)?);
//!     Ok(())
//! }
//! ```

pub mod notes;

pub use gardengraph_core::prelude::*;
pub use notes::{NoteCollection, NoteFile};

pub mod prelude {
    pub use crate::notes::{NoteCollection, NoteFile};
    pub use gardengraph_core::prelude::*;
    pub use gardengraph_graph::GraphBuilder;
}
