//! Note discovery and the filesystem [`Document`] implementation

use async_trait::async_trait;
use gardengraph_core::prelude::*;
use gardengraph_graph::GraphBuilder;
use gardengraph_parser::{extract_frontmatter, parse_document};
use std::path::{Component, Path, PathBuf};
use tracing::instrument;
use walkdir::{DirEntry, WalkDir};

/// A note file on disk.
///
/// Metadata is parsed once at discovery; [`Document::read`] re-reads the file
/// and returns the body after the frontmatter block.
#[derive(Debug, Clone)]
pub struct NoteFile {
    path: PathBuf,
    address: String,
    path_stem: String,
    slug: String,
    metadata: DocumentMeta,
}

impl NoteFile {
    /// Load a note's metadata. `root` is the notes directory containing `path`.
    pub async fn load(root: &Path, path: &Path, url_prefix: &str) -> Result<Self> {
        let path_stem = path_stem(root, path)?;
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::invalid_path(format!("{}", path.display())))?
            .to_string();

        let content = tokio::fs::read_to_string(path).await.map_err(Error::io)?;
        let (metadata, _) = parse_document(&content).map_err(|e| match e {
            Error::ParseError { reason } => {
                Error::parse_error(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })?;

        let address = match metadata.permalink.as_deref().filter(|p| !p.is_empty()) {
            Some(permalink) => permalink.to_string(),
            None => format!("{}{}/", url_prefix, path_stem),
        };

        Ok(Self {
            path: path.to_path_buf(),
            address,
            path_stem,
            slug,
            metadata,
        })
    }

    /// Location on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Document for NoteFile {
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
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::file_not_found(self.path.clone()),
                _ => Error::io(e),
            })?;
        let (_, body) = extract_frontmatter(&content);
        Ok(body.to_string())
    }
}

/// Relative path without extension, `/`-separated.
fn path_stem(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::invalid_path(format!(
            "{} is outside {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.with_extension("").components() {
        match component {
            Component::Normal(name) => parts.push(
                name.to_str()
                    .ok_or_else(|| {
                        Error::invalid_path(format!("not valid UTF-8: {}", path.display()))
                    })?
                    .to_string(),
            ),
            Component::CurDir => {}
            _ => {
                return Err(Error::invalid_path(format!(
                    "unexpected component in {}",
                    path.display()
                )));
            }
        }
    }

    Ok(parts.join("/"))
}

/// All notes under a directory, in relative-path order.
#[derive(Debug, Clone, Default)]
pub struct NoteCollection {
    notes: Vec<NoteFile>,
}

impl NoteCollection {
    /// Scan `config.root` and load every note's metadata.
    #[instrument(skip(config), fields(root = ?config.root), name = "notes_load")]
    pub async fn load(config: &VaultConfig) -> Result<Self> {
        config.validate()?;
        log::info!("Scanning notes in {}", config.root.display());

        let files = scan_files(config)?;
        log::info!("Found {} note files", files.len());

        let mut notes = Vec::with_capacity(files.len());
        for path in files {
            log::debug!("Loading note: {}", path.display());
            notes.push(NoteFile::load(&config.root, &path, &config.url_prefix).await?);
        }

        Ok(Self { notes })
    }

    pub fn notes(&self) -> &[NoteFile] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Build the link graph of this collection.
    pub async fn build_graph(&self, builder: &GraphBuilder) -> Result<Graph> {
        builder.build(&self.notes).await
    }
}

fn is_excluded(entry: &DirEntry, config: &VaultConfig) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.excluded_paths.contains(name))
}

/// Note files under the root, sorted by path
fn scan_files(config: &VaultConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, config));

    for entry in walker {
        let entry = entry.map_err(|e| Error::other(format!("Failed to scan notes: {}", e)))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let allowed = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| config.allowed_extensions.contains(&ext.to_lowercase()));
        if !allowed {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if size > config.max_file_size {
            log::warn!(
                "Skipping {} ({} bytes exceeds {} byte limit)",
                path.display(),
                size,
                config.max_file_size
            );
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
