//! Tests for note discovery and graph building from disk

use gardengraph_vault::prelude::*;
use std::path::Path;
use tempfile::TempDir;

async fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.unwrap();
    }
    tokio::fs::write(path, content).await.unwrap();
}

async fn setup_garden() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write(
        root,
        "index.md",
        "---\ntitle: Welcome\ntags: [gardenEntry]\n---\nStart with [[topics/rust/ownership|Ownership]].",
    )
    .await;
    write(
        root,
        "topics/rust/ownership.md",
        "---\nnoteIcon: \"2\"\n---\nBack to <a href=\"/notes/index/\">home</a>. See [[topics/rust/borrowing#rules|rules]].",
    )
    .await;
    write(
        root,
        "topics/rust/borrowing.md",
        "No frontmatter, links to [[nowhere|missing]].",
    )
    .await;
    write(root, "about.md", "---\npermalink: /about/\nhideInGraph: true\n---\nAbout").await;
    write(root, ".obsidian/workspace.md", "[[index|ignored]]").await;
    write(root, "assets/diagram.png", "not a note").await;

    temp_dir
}

#[tokio::test]
async fn test_load_discovers_notes_in_path_order() {
    let temp = setup_garden().await;
    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();

    let stems: Vec<&str> = notes.notes().iter().map(|n| n.path_stem()).collect();
    assert_eq!(
        stems,
        vec!["about", "index", "topics/rust/borrowing", "topics/rust/ownership"]
    );
}

#[tokio::test]
async fn test_note_addresses_and_metadata() {
    let temp = setup_garden().await;
    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();

    let about = &notes.notes()[0];
    assert_eq!(about.address(), "/about/");
    assert!(about.metadata().hide_in_graph);

    let ownership = &notes.notes()[3];
    assert_eq!(ownership.address(), "/notes/topics/rust/ownership/");
    assert_eq!(ownership.slug(), "ownership");
    assert_eq!(ownership.metadata().note_icon.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_read_strips_frontmatter_every_time() {
    let temp = setup_garden().await;
    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();

    let index = &notes.notes()[1];
    let body = index.read().await.unwrap();
    assert_eq!(body, "Start with [[topics/rust/ownership|Ownership]].");

    // no caching: edits on disk are visible to the next read
    tokio::fs::write(index.path(), "---\ntitle: Welcome\n---\nChanged")
        .await
        .unwrap();
    assert_eq!(index.read().await.unwrap(), "Changed");
}

#[tokio::test]
async fn test_build_graph_from_disk() {
    let temp = setup_garden().await;
    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();
    let builder = GraphBuilder::new(GraphConfig::default().with_default_note_icon("1"));
    let graph = notes.build_graph(&builder).await.unwrap();

    assert_eq!(graph.home_alias, "/notes/index/");
    assert_eq!(graph.node_count(), 4);

    let index = graph.node("/notes/index/").unwrap();
    assert_eq!(index.title, "Welcome");
    assert!(index.home);
    assert_eq!(index.out_bound, vec!["/notes/topics/rust/ownership/"]);

    let ownership = graph.node("/notes/topics/rust/ownership/").unwrap();
    assert_eq!(ownership.group, "rust");
    assert_eq!(ownership.note_icon.as_deref(), Some("2"));
    assert_eq!(
        ownership.out_bound,
        vec!["/notes/topics/rust/borrowing/", "notes/index/"]
    );
    assert_eq!(ownership.back_links, vec!["/notes/index/"]);

    let borrowing = graph.node("/notes/topics/rust/borrowing/").unwrap();
    assert_eq!(borrowing.out_bound, vec!["nowhere"]);
    assert_eq!(borrowing.back_links, vec!["/notes/topics/rust/ownership/"]);
    assert_eq!(borrowing.note_icon.as_deref(), Some("1"));

    let about = graph.node("/about/").unwrap();
    assert!(about.hide);
    assert_eq!(about.size, 0);

    assert_eq!(graph.links.len(), 2);
}

#[tokio::test]
async fn test_excluded_and_oversize_files_skipped() {
    let temp = setup_garden().await;
    write(temp.path(), "drafts/wip.md", "draft").await;
    write(temp.path(), "big.md", &"x".repeat(64)).await;

    let config = VaultConfig::builder(temp.path())
        .exclude("drafts")
        .max_file_size(32)
        .build()
        .unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();

    assert!(notes.notes().iter().all(|n| n.path_stem() != "drafts/wip"));
    assert!(notes.notes().iter().all(|n| n.path_stem() != "big"));
}

#[tokio::test]
async fn test_malformed_frontmatter_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "bad.md", "---\ntitle: [unclosed\n---\nBody").await;

    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let err = NoteCollection::load(&config).await.unwrap_err();
    assert!(matches!(err, Error::ParseError { .. }));
    assert!(err.to_string().contains("bad.md"));
}

#[tokio::test]
async fn test_deleted_note_fails_the_build() {
    let temp = setup_garden().await;
    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();

    tokio::fs::remove_file(temp.path().join("index.md")).await.unwrap();
    let err = notes.build_graph(&GraphBuilder::default()).await.unwrap_err();
    match err {
        Error::FileNotFound { path } => assert!(path.ends_with("index.md")),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_numeric_title_and_icon_do_not_fail_load() {
    let temp = setup_garden().await;
    write(temp.path(), "years/2024.md", "---
title: 2024
noteIcon: 2
---
A year").await;

    let config = VaultConfig::builder(temp.path()).build().unwrap();
    let notes = NoteCollection::load(&config).await.unwrap();
    assert_eq!(notes.len(), 5);

    let graph = notes.build_graph(&GraphBuilder::default()).await.unwrap();
    let year = graph.node("/notes/years/2024/").unwrap();
    assert_eq!(year.title, "2024");
    assert_eq!(year.note_icon.as_deref(), Some("2"));
}
