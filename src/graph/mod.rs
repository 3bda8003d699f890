//! # Graph Construction and Rendering Module
//!
//! This module provides the vertex store that dependency entries are
//! ingested into, and renderers that visualize the result.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraph**: index-based arena of vertices with a lookup table
//!   from data value to vertex
//! - **Vertex**: a data value with its parent and child adjacency
//! - **VertexKey**: the trait a data value implements to act as a vertex
//!   key, including validation of blank or missing labels
//!
//! ### Graph Rendering
//! - **GraphRenderer**: renders graphs as ASCII, Mermaid or DOT
//! - Supports cycle highlighting
//!
//! ## Example
//!
//! ```
//! use ferris_loops::graph::{DependencyGraph, GraphRenderer};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = DependencyGraph::new();
//! graph.add_entry("app", ["core"])?;
//! graph.add_entry("cli", ["app", "core"])?;
//!
//! let core = graph.index_of(&"core").unwrap();
//! assert_eq!(graph.vertex(core).children().len(), 2);
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("core"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **ASCII**: terminal-friendly listing of each vertex's dependents
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraph;
pub use renderer::GraphRenderer;
pub use types::{Vertex, VertexIndex, VertexKey};
