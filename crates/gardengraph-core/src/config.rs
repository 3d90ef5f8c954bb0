//! Configuration types for graph building and note discovery.
//!
//! Follows a builder pattern for complex configuration with validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default entry-point tag that marks a note as home.
pub const DEFAULT_HOME_TAG: &str = "gardenEntry";

/// Home alias used when no document is flagged as home.
pub const DEFAULT_ROOT_ALIAS: &str = "/";

/// Settings passed explicitly to the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Icon used for nodes whose metadata has no `noteIcon`
    pub default_note_icon: Option<String>,
    /// Tag that implies the home flag
    pub home_tag: String,
    /// Home alias when nothing is flagged home
    pub root_alias: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_note_icon: None,
            home_tag: DEFAULT_HOME_TAG.to_string(),
            root_alias: DEFAULT_ROOT_ALIAS.to_string(),
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_note_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_note_icon = Some(icon.into());
        self
    }

    pub fn with_home_tag(mut self, tag: impl Into<String>) -> Self {
        self.home_tag = tag.into();
        self
    }

    pub fn with_root_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_alias = alias.into();
        self
    }
}

/// Configuration for a directory of notes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Path to the notes directory
    pub root: PathBuf,
    /// Prepended to the path stem to form an address, e.g. `/notes/`
    pub url_prefix: String,
    /// Extensions (without dot) treated as notes
    pub allowed_extensions: HashSet<String>,
    /// File or directory names skipped while scanning
    pub excluded_paths: HashSet<String>,
    /// Larger files are skipped
    pub max_file_size: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            url_prefix: "/notes/".to_string(),
            allowed_extensions: ["md", "markdown"].iter().map(|s| s.to_string()).collect(),
            excluded_paths: [".obsidian", ".git", ".DS_Store", "node_modules"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl VaultConfig {
    /// Create a new vault config with builder
    pub fn builder(root: impl Into<PathBuf>) -> VaultConfigBuilder {
        VaultConfigBuilder::new(root)
    }

    /// Validate the vault configuration
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Error::config_error(format!(
                "Notes path does not exist: {}",
                self.root.display()
            )));
        }

        if !self.root.is_dir() {
            return Err(Error::config_error(format!(
                "Notes path is not a directory: {}",
                self.root.display()
            )));
        }

        if !self.url_prefix.starts_with('/') || !self.url_prefix.ends_with('/') {
            return Err(Error::config_error(format!(
                "URL prefix must start and end with '/': {}",
                self.url_prefix
            )));
        }

        if self.allowed_extensions.is_empty() {
            return Err(Error::config_error("At least one note extension is required"));
        }

        Ok(())
    }
}

/// Builder for VaultConfig
pub struct VaultConfigBuilder {
    config: VaultConfig,
}

impl VaultConfigBuilder {
    /// Create a new builder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: VaultConfig {
                root: root.into(),
                ..VaultConfig::default()
            },
        }
    }

    pub fn url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.url_prefix = prefix.into();
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.excluded_paths.insert(name.into());
        self
    }

    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<VaultConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub vault: VaultConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file. Keys left out take their defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        log::debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))
    }
}
