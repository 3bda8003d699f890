//! Integration tests for ferris-loops using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use ferris_loops::analysis::analyze_graph;
use ferris_loops::discovery::discover_manifests;
use ferris_loops::error::FerrisLoopsError;
use ferris_loops::manifest::GraphManifest;
use ferris_loops::reports::{JsonReportGenerator, ReportGenerator};
use ferris_loops::{build_graph, detect_cycles};
use petgraph::algo::is_cyclic_directed;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Entry definition: (name, depends_on)
type EntryDefinition<'a> = (&'a str, &'a [&'a str]);

fn write_manifest(
    dir: &Path,
    file: &str,
    name: Option<&str>,
    entries: &[EntryDefinition],
) -> PathBuf {
    let mut content = String::new();
    if let Some(name) = name {
        content.push_str(&format!("name = \"{name}\"\n"));
    }
    for (entry, deps) in entries {
        let deps = deps
            .iter()
            .map(|d| format!("\"{d}\""))
            .collect::<Vec<_>>()
            .join(", ");
        content.push_str(&format!(
            "\n[[entry]]\nname = \"{entry}\"\ndepends_on = [{deps}]\n"
        ));
    }

    let path = dir.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn create_sample_manifests(temp_dir: &TempDir) {
    let root = temp_dir.path();

    write_manifest(
        root,
        "services/api.toml",
        Some("api"),
        &[
            ("api", &["auth", "storage"]),
            ("auth", &["storage"]),
            ("storage", &["api"]),
        ],
    );

    write_manifest(
        root,
        "tools/build.toml",
        None,
        &[("lint", &["parser"]), ("fmt", &["parser"]), ("parser", &[])],
    );
}

#[test]
fn test_manifests_are_discovered_and_analysed() {
    let temp_dir = TempDir::new().unwrap();
    create_sample_manifests(&temp_dir);

    let manifests = discover_manifests(&[temp_dir.path().to_path_buf()]);
    assert_eq!(manifests.len(), 2);

    let analyses: Vec<_> = manifests
        .iter()
        .map(|path| {
            let manifest = GraphManifest::parse_file(path).unwrap();
            let graph = build_graph(manifest.entries()).unwrap();
            analyze_graph(&manifest.display_name(), &graph)
        })
        .collect();

    assert_eq!(analyses[0].name, "api");
    assert_eq!(analyses[0].vertex_count, 3);
    assert_eq!(analyses[0].edge_count, 4);
    // api -> storage -> api closes before the longer loop through auth
    assert_eq!(
        analyses[0].cycles,
        vec![
            vec!["api".to_string(), "storage".to_string()],
            vec!["api".to_string(), "storage".to_string(), "auth".to_string()],
        ]
    );
    assert_eq!(analyses[0].tangles.len(), 1);

    assert_eq!(analyses[1].name, "build");
    assert!(!analyses[1].has_cycles());
    assert!(analyses[1].tangles.is_empty());

    let report = JsonReportGenerator::new().generate_report(&analyses).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["has_cycles"], true);
    assert_eq!(json["cycle_count"], 2);
}

#[test]
fn test_blank_entry_name_is_rejected_with_position() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        "broken.toml",
        None,
        &[("A", &[]), ("B", &["A", " "])],
    );

    let manifest = GraphManifest::parse_file(&path).unwrap();
    let err = build_graph(manifest.entries()).unwrap_err();

    match err {
        FerrisLoopsError::InvalidEntry { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(
                source.to_string(),
                "Invalid vertex key in dependency #2: blank label"
            );
        }
        other => panic!("Expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn test_detection_agrees_with_petgraph() {
    let datasets: Vec<Vec<(&str, Vec<&str>)>> = vec![
        vec![("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])],
        vec![("a", vec!["b"]), ("b", vec!["a"])],
        vec![("x", vec!["x"])],
        vec![("p", vec!["q", "r"]), ("q", vec!["r"]), ("r", vec!["s"]), ("s", vec!["p"])],
        vec![("m", vec![]), ("n", vec!["m"]), ("o", vec!["n", "m"])],
    ];

    for entries in datasets {
        let graph = build_graph(entries.clone()).unwrap();
        let cycles = detect_cycles(&graph);

        assert_eq!(
            !cycles.is_empty(),
            is_cyclic_directed(&graph.to_petgraph()),
            "disagreement on {entries:?}"
        );

        // Every reported cycle follows real parent -> child edges
        for cycle in &cycles {
            for (i, from) in cycle.iter().enumerate() {
                let to = &cycle[(i + 1) % cycle.len()];
                let from = graph.index_of(from).unwrap();
                let to = graph.index_of(to).unwrap();
                assert!(graph.vertex(from).children().contains(&to));
            }
        }
    }
}

#[test]
fn test_parent_and_child_links_are_symmetric() {
    let graph = build_graph(vec![
        ("lint", vec!["parser", "config"]),
        ("parser", vec!["lexer"]),
        ("config", vec!["parser", "config"]),
        ("lint", vec!["lexer"]),
    ])
    .unwrap();

    let mut edges = 0;
    for idx in graph.vertex_indices() {
        let vertex = graph.vertex(idx);
        for &child in vertex.children() {
            assert!(graph.vertex(child).parents().contains(&idx));
            edges += 1;
        }
        for &parent in vertex.parents() {
            assert!(graph.vertex(parent).children().contains(&idx));
        }
    }
    assert_eq!(edges, graph.edge_count());
    // lint, parser, config, lexer
    assert_eq!(graph.vertex_count(), 4);
}
