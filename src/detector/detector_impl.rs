use std::collections::HashSet;

use crate::graph::{DependencyGraph, VertexIndex};

/// One elementary cycle, in the order the depth-first walk followed it
///
/// The sequence starts at the vertex the back-edge points to and ends at
/// the vertex the back-edge leaves from. The closing vertex is not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    vertices: Vec<VertexIndex>,
}

impl Cycle {
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    // Cycles are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, idx: VertexIndex) -> bool {
        self.vertices.contains(&idx)
    }

    /// Parent→child edges walked by this cycle, closing edge last
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        let first = self.vertices[0];
        self.vertices
            .iter()
            .copied()
            .zip(self.vertices[1..].iter().copied().chain(Some(first)))
    }

    /// Data values of the cycle's vertices
    pub fn labels<T: Clone>(&self, graph: &DependencyGraph<T>) -> Vec<T> {
        self.vertices
            .iter()
            .map(|&idx| graph.data(idx).clone())
            .collect()
    }
}

/// A vertex on the DFS path together with the next child to examine
struct Frame {
    vertex: VertexIndex,
    next_child: usize,
}

/// Detector for finding dependency cycles
///
/// Runs a depth-first search from every vertex that has not been visited
/// yet, following parent→child edges. A child that is still on the current
/// path closes a cycle made of the path from that child to the top.
pub struct CycleDetector {
    cycles: Vec<Cycle>,
    seen: HashSet<Vec<VertexIndex>>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self {
            cycles: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Detect all cycles in the graph, replacing any earlier results
    ///
    /// Vertices are explored at most once across the whole call, so the
    /// walk is O(V + E). The search keeps its own work stack and never
    /// recurses.
    pub fn detect_cycles<T>(&mut self, graph: &DependencyGraph<T>) {
        self.cycles.clear();
        self.seen.clear();

        let count = graph.vertex_count();
        let mut visited = vec![false; count];
        // Position on the current path, for vertices that are on it
        let mut path_position: Vec<Option<usize>> = vec![None; count];
        let mut path: Vec<VertexIndex> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();

        for root in graph.vertex_indices() {
            if visited[root.index()] {
                continue;
            }

            Self::enter(root, &mut visited, &mut path_position, &mut path, &mut frames);

            while let Some(frame) = frames.last_mut() {
                let vertex = frame.vertex;
                let children = graph.vertex(vertex).children();

                let Some(&child) = children.get(frame.next_child) else {
                    frames.pop();
                    path.pop();
                    path_position[vertex.index()] = None;
                    continue;
                };
                frame.next_child += 1;

                if !visited[child.index()] {
                    Self::enter(child, &mut visited, &mut path_position, &mut path, &mut frames);
                } else if let Some(start) = path_position[child.index()] {
                    self.record(path[start..].to_vec());
                }
            }
        }
    }

    fn enter(
        vertex: VertexIndex,
        visited: &mut [bool],
        path_position: &mut [Option<usize>],
        path: &mut Vec<VertexIndex>,
        frames: &mut Vec<Frame>,
    ) {
        visited[vertex.index()] = true;
        path_position[vertex.index()] = Some(path.len());
        path.push(vertex);
        frames.push(Frame {
            vertex,
            next_child: 0,
        });
    }

    /// Keep `vertices` unless the exact same sequence was already found
    fn record(&mut self, vertices: Vec<VertexIndex>) {
        if self.seen.insert(vertices.clone()) {
            self.cycles.push(Cycle { vertices });
        }
    }

    /// Get all detected cycles, in discovery order
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Detected cycles as sequences of data values
    pub fn labeled_cycles<T: Clone>(&self, graph: &DependencyGraph<T>) -> Vec<Vec<T>> {
        self.cycles.iter().map(|cycle| cycle.labels(graph)).collect()
    }

    /// Every vertex that takes part in at least one detected cycle
    pub fn vertices_in_cycles(&self) -> HashSet<VertexIndex> {
        self.cycles
            .iter()
            .flat_map(|cycle| cycle.vertices().iter().copied())
            .collect()
    }
}
