use std::collections::HashSet;
use std::fmt::Display;
use std::io::Write;

use miette::Result;

use super::builder::DependencyGraph;
use super::types::VertexIndex;
use crate::detector::Cycle;
use crate::error::FerrisLoopsError;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(FerrisLoopsError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(FerrisLoopsError::from)
    };
}

/// Vertices and edges that belong to at least one cycle
struct CycleMembership {
    vertices: HashSet<VertexIndex>,
    edges: HashSet<(VertexIndex, VertexIndex)>,
}

impl CycleMembership {
    fn new(cycles: &[Cycle]) -> Self {
        let mut vertices = HashSet::new();
        let mut edges = HashSet::new();
        for cycle in cycles {
            vertices.extend(cycle.vertices().iter().copied());
            edges.extend(cycle.edges());
        }
        Self { vertices, edges }
    }
}

/// Renders a dependency graph as text, Mermaid or Graphviz DOT
///
/// Edges are drawn from dependency to dependent, the direction in which
/// cycles are reported.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    fn membership(&self, cycles: &[Cycle]) -> CycleMembership {
        if self.highlight_cycles {
            CycleMembership::new(cycles)
        } else {
            CycleMembership::new(&[])
        }
    }

    pub fn render_ascii<T: Display>(
        &self,
        graph: &DependencyGraph<T>,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.is_empty() {
            writeln_out!(output, "No vertices found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Dependency Graph\n")?;

        let membership = self.membership(cycles);

        for idx in graph.vertex_indices() {
            let vertex = graph.vertex(idx);

            if membership.vertices.contains(&idx) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", vertex)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", vertex)?;
            }

            let children = vertex.children();
            if children.is_empty() {
                writeln_out!(output, "  └── (no dependents)")?;
            }

            for (i, &child) in children.iter().enumerate() {
                let prefix = if i == children.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if membership.edges.contains(&(idx, child)) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} → {}{}", prefix, graph.vertex(child), marker)?;
            }

            writeln_out!(output)?;
        }

        if !membership.vertices.is_empty() {
            writeln_out!(output, "⚠️  = Part of a dependency cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid<T: Display>(
        &self,
        graph: &DependencyGraph<T>,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        let membership = self.membership(cycles);

        for idx in graph.vertex_indices() {
            let label = escape_label(&graph.vertex(idx).to_string());
            let node_id = node_id(idx);

            if membership.vertices.contains(&idx) {
                writeln_out!(output, "    {}((\"{}\"))", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{}",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        // Mermaid styles edges by declaration order
        let mut edge_number = 0usize;
        let mut cycle_edge_numbers = Vec::new();
        for idx in graph.vertex_indices() {
            for &child in graph.vertex(idx).children() {
                let in_cycle = membership.edges.contains(&(idx, child));
                let arrow = if in_cycle { "==>" } else { "-->" };
                writeln_out!(output, "    {} {} {}", node_id(idx), arrow, node_id(child))?;
                if in_cycle {
                    cycle_edge_numbers.push(edge_number);
                }
                edge_number += 1;
            }
        }

        if !cycle_edge_numbers.is_empty() {
            let numbers: Vec<String> = cycle_edge_numbers.iter().map(|n| n.to_string()).collect();
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                numbers.join(","),
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot<T: Display>(
        &self,
        graph: &DependencyGraph<T>,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            "    node [shape=box, style=\"rounded,filled\", fontname=\"Helvetica\"];"
        )?;
        writeln_out!(output)?;

        let membership = self.membership(cycles);

        for idx in graph.vertex_indices() {
            let label = escape_label(&graph.vertex(idx).to_string());
            let (fill, stroke, width) = if membership.vertices.contains(&idx) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE, 3)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE, 1)
            };
            writeln_out!(
                output,
                "    {} [label=\"{}\", fillcolor=\"{}\", color=\"{}\", penwidth={}];",
                node_id(idx),
                label,
                fill,
                stroke,
                width
            )?;
        }

        writeln_out!(output)?;

        for idx in graph.vertex_indices() {
            for &child in graph.vertex(idx).children() {
                if membership.edges.contains(&(idx, child)) {
                    writeln_out!(
                        output,
                        "    {} -> {} [color=\"{}\", penwidth=3];",
                        node_id(idx),
                        node_id(child),
                        colors::CYCLE_EDGE
                    )?;
                } else {
                    writeln_out!(
                        output,
                        "    {} -> {} [color=\"{}\"];",
                        node_id(idx),
                        node_id(child),
                        colors::NORMAL_EDGE
                    )?;
                }
            }
        }

        writeln_out!(output, "}}")?;

        Ok(())
    }
}

fn node_id(idx: VertexIndex) -> String {
    format!("v{}", idx.index())
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
