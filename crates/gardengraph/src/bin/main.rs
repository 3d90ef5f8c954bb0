//! gardengraph CLI

use anyhow::{Context, Result};
use clap::Parser;
use gardengraph::{AppConfig, GraphStats, LogFormat, export_graph};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// gardengraph - link graph builder for digital gardens
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the notes directory
    #[arg(short, long, env = "GARDENGRAPH_NOTES")]
    notes: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "GARDENGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Write the graph JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Icon for notes without a `noteIcon`
    #[arg(long, env = "NOTE_ICON_DEFAULT")]
    note_icon: Option<String>,

    /// Prefix for note addresses, e.g. /notes/
    #[arg(long)]
    url_prefix: Option<String>,

    /// Tag that marks the home note
    #[arg(long)]
    home_tag: Option<String>,

    /// Pretty-print the JSON
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pretty: bool,

    /// Log graph statistics after building
    #[arg(long, action = clap::ArgAction::SetTrue)]
    stats: bool,

    /// Debug logging
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,

    /// Log format (human, json)
    #[arg(long, default_value = "human")]
    log_format: LogFormat,
}

fn expand(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand path {}", raw))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout may carry the graph, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match args.log_format {
        LogFormat::Human => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(&expand(path)?)
            .await
            .context("Failed to load configuration")?,
        None => AppConfig::default(),
    };

    if let Some(notes) = &args.notes {
        config.vault.root = expand(notes)?;
    }
    if let Some(prefix) = &args.url_prefix {
        config.vault.url_prefix = prefix.clone();
    }
    if let Some(icon) = &args.note_icon {
        config.graph.default_note_icon = Some(icon.clone());
    }
    if let Some(tag) = &args.home_tag {
        config.graph.home_tag = tag.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    log::info!("gardengraph v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args).await?;
    log::info!("Notes directory: {}", config.vault.root.display());

    let graph = export_graph(&config)
        .await
        .context("Failed to build link graph")?;

    if args.stats {
        let stats = GraphStats::from_graph(&graph);
        log::info!(
            "{} nodes, {} links, {} isolated, {} hidden, {} home, average degree {:.2}",
            stats.total_nodes,
            stats.total_links,
            stats.isolated_nodes,
            stats.hidden_nodes,
            stats.home_nodes,
            stats.average_degree
        );
    }

    let json = graph.to_json(args.pretty)?;
    match &args.output {
        Some(path) => {
            let path = expand(path)?;
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Graph written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
