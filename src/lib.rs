//! # Ferris Loops - Find Dependency Cycles in Labeled Graphs
//!
//! Ferris Loops builds a directed graph from entries of the form "this value
//! depends on those values" and enumerates the elementary cycles a
//! depth-first search walks into.
//!
//! ## Main Components
//!
//! - **Graph**: the vertex store; deduplicates vertices by value and keeps
//!   parent and child adjacency in sync as entries arrive
//! - **Detector**: depth-first cycle enumeration with an explicit work stack
//! - **Manifests**: TOML files describing one dataset each, for the CLI
//! - **Reports**: human-readable and machine-readable cycle reports
//!
//! ## Usage
//!
//! ```
//! use ferris_loops::{build_graph, detect_cycles};
//!
//! # fn main() -> miette::Result<()> {
//! // "B depends on A" is written as ("B", ["A"])
//! let graph = build_graph([("A", ["C"]), ("B", ["A"]), ("C", ["B"])])?;
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(detect_cycles(&graph), vec![vec!["A", "B", "C"]]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Forward references and self-loops
//!
//! ```
//! use ferris_loops::core::Entry;
//! use ferris_loops::{build_graph, detect_cycles};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = build_graph(vec![
//!     Entry::new("I", vec!["D", "I"]),
//!     Entry::standalone("D"),
//! ])?;
//!
//! assert_eq!(detect_cycles(&graph), vec![vec!["I"]]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Rejected entries
//!
//! ```
//! use ferris_loops::build_graph;
//! use ferris_loops::error::FerrisLoopsError;
//!
//! let result = build_graph([("A", vec!["B"]), ("B", vec!["  "])]);
//! assert!(matches!(
//!     result,
//!     Err(FerrisLoopsError::InvalidEntry { index: 1, .. })
//! ));
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod figures;
pub mod graph;
pub mod manifest;
pub mod reports;

pub use common::ConfigBuilder;

use crate::core::Entry;
use crate::detector::CycleDetector;
use crate::error::FerrisLoopsError;
use crate::graph::{DependencyGraph, VertexKey};

/// Build a graph by ingesting `entries` in order
///
/// Stops at the first entry with an invalid key and reports its position;
/// entries before it have no further effect since the graph is discarded.
pub fn build_graph<T, I>(entries: I) -> Result<DependencyGraph<T>, FerrisLoopsError>
where
    T: VertexKey,
    I: IntoIterator,
    I::Item: Into<Entry<T>>,
{
    let mut graph = DependencyGraph::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let Entry { data, dependencies } = entry.into();
        graph
            .add_entry(data, dependencies)
            .map_err(|source| FerrisLoopsError::InvalidEntry { index, source })?;
    }
    Ok(graph)
}

/// Enumerate the graph's cycles as sequences of data values
pub fn detect_cycles<T: VertexKey>(graph: &DependencyGraph<T>) -> Vec<Vec<T>> {
    let mut detector = CycleDetector::new();
    detector.detect_cycles(graph);
    detector.labeled_cycles(graph)
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
