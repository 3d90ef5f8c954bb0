//! The document contract consumed by the graph builder.
//!
//! Documents are owned by the caller. The builder only reads their
//! identifiers and metadata, and awaits [`Document::read`] exactly once per build.

use crate::error::Result;
use crate::models::DocumentMeta;
use async_trait::async_trait;

/// A source document: one note in the collection.
#[async_trait]
pub trait Document: Send + Sync {
    /// Canonical routable identifier (unique key), e.g. `/notes/rust/ownership/`
    fn address(&self) -> &str;

    /// Slash-separated logical path without extension, e.g. `rust/ownership`
    fn path_stem(&self) -> &str;

    /// Fallback title when the metadata has none
    fn slug(&self) -> &str;

    fn metadata(&self) -> &DocumentMeta;

    /// Fetch the raw body. Not cached by the builder.
    async fn read(&self) -> Result<String>;
}

/// A document whose body is held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    address: String,
    path_stem: String,
    slug: String,
    metadata: DocumentMeta,
    body: String,
}

impl InMemoryDocument {
    /// Create a document; the slug defaults to the last segment of `path_stem`.
    pub fn new(
        address: impl Into<String>,
        path_stem: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let path_stem = path_stem.into();
        let slug = path_stem.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            address: address.into(),
            path_stem,
            slug,
            metadata: DocumentMeta::default(),
            body: body.into(),
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMeta) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

#[async_trait]
impl Document for InMemoryDocument {
    fn address(&self) -> &str {
        &self.address
    }

    fn path_stem(&self) -> &str {
        &self.path_stem
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn metadata(&self) -> &DocumentMeta {
        &self.metadata
    }

    async fn read(&self) -> Result<String> {
        Ok(self.body.clone())
    }
}
