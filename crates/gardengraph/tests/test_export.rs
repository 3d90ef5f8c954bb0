//! End-to-end tests: notes directory to graph JSON

use gardengraph::{AppConfig, GraphStats, VaultConfig, export_graph};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn setup_garden() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(
        root,
        "home.md",
        "---\ndg-home: true\ntitle: Home\n---\n[[garden/plants/fern|Ferns]] and [[garden/plants/moss|Moss]]",
    );
    write(root, "garden/plants/fern.md", "Grows near [[garden/plants/moss|moss]].");
    write(root, "garden/plants/moss.md", "---\ntags: [green]\n---\nSoft.");
    write(root, "lonely.md", "No links.");
    temp_dir
}

fn app_config(root: &Path) -> AppConfig {
    AppConfig {
        vault: VaultConfig::builder(root).build().unwrap(),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_export_graph() {
    let temp = setup_garden();
    let graph = export_graph(&app_config(temp.path())).await.unwrap();

    assert_eq!(graph.home_alias, "/notes/home/");
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);

    let moss = graph.node("/notes/garden/plants/moss/").unwrap();
    assert_eq!(moss.group, "plants");
    assert_eq!(
        moss.back_links,
        vec!["/notes/garden/plants/fern/", "/notes/home/"]
    );
    assert_eq!(moss.size, 2);

    let stats = GraphStats::from_graph(&graph);
    assert_eq!(stats.isolated_nodes, 1);
    assert_eq!(stats.home_nodes, 1);
}

#[tokio::test]
async fn test_export_graph_json_layout() {
    let temp = setup_garden();
    let graph = export_graph(&app_config(temp.path())).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&graph.to_json(false).unwrap()).unwrap();

    assert_eq!(json["homeAlias"], "/notes/home/");
    let nodes = json["nodes"].as_object().unwrap();
    let keys: Vec<&str> = nodes.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "/notes/garden/plants/fern/",
            "/notes/garden/plants/moss/",
            "/notes/home/",
            "/notes/lonely/"
        ]
    );
    assert_eq!(nodes["/notes/home/"]["outBound"].as_array().unwrap().len(), 2);
    assert_eq!(json["links"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_export_graph_missing_directory() {
    let temp = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.vault.root = temp.path().join("missing");
    assert!(export_graph(&config).await.is_err());
}

#[test]
fn test_cli_writes_output_file() {
    let temp = setup_garden();
    let out = temp.path().join("graph.json");

    let status = Command::new(env!("CARGO_BIN_EXE_gardengraph"))
        .arg("--notes")
        .arg(temp.path())
        .arg("--output")
        .arg(&out)
        .arg("--note-icon")
        .arg("1")
        .arg("--stats")
        .env_remove("RUST_LOG")
        .status()
        .unwrap();
    assert!(status.success());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["homeAlias"], "/notes/home/");
    assert_eq!(json["nodes"]["/notes/lonely/"]["noteIcon"], "1");
}

#[test]
fn test_cli_config_file_and_stdout() {
    let temp = setup_garden();
    let config = temp.path().join("gardengraph.yaml");
    std::fs::write(&config, "graph:\n  root_alias: /start/\nvault:\n  url_prefix: /g/\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gardengraph"))
        .arg("--notes")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--home-tag")
        .arg("nothing")
        .env_remove("NOTE_ICON_DEFAULT")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // dg-home still marks the home note
    assert_eq!(json["homeAlias"], "/g/home/");
    assert!(json["nodes"]["/g/lonely/"].get("noteIcon").is_none());
}

#[test]
fn test_cli_missing_config_file_fails() {
    let temp = setup_garden();

    let output = Command::new(env!("CARGO_BIN_EXE_gardengraph"))
        .arg("--notes")
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("gardengraf.yaml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("gardengraf.yaml"));
}

#[test]
fn test_cli_stats_logged_to_stderr() {
    let temp = setup_garden();

    let output = Command::new(env!("CARGO_BIN_EXE_gardengraph"))
        .arg("--notes")
        .arg(temp.path())
        .arg("--stats")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("4 nodes, 3 links, 1 isolated, 0 hidden, 1 home"));
}
