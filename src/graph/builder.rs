use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Vertex, VertexIndex, VertexKey};
use crate::error::{InvalidKeyError, KeyPosition};

/// Directed dependency graph stored as an index-based arena
///
/// Vertices live in a dense vector in creation order; edges are kept as
/// index lists on both endpoints. A lookup table maps each data value to its
/// vertex so that the same value always resolves to the same vertex.
#[derive(Debug, Clone)]
pub struct DependencyGraph<T> {
    vertices: Vec<Vertex<T>>,
    indices: HashMap<T, VertexIndex>,
}

impl<T: VertexKey> Default for DependencyGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexKey> DependencyGraph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Declare that `data` depends on each value in `dependencies`
    ///
    /// Missing vertices are created on demand, so dependencies may reference
    /// values that are declared later. Dependencies already recorded as
    /// parents of `data` are skipped, which makes repeated declarations
    /// no-ops.
    ///
    /// All keys are validated before the graph is touched: a rejected entry
    /// leaves the graph unchanged.
    pub fn add_entry<I>(&mut self, data: T, dependencies: I) -> Result<(), InvalidKeyError>
    where
        I: IntoIterator<Item = T>,
    {
        let dependencies: Vec<T> = dependencies.into_iter().collect();

        if let Some(reason) = data.key_violation() {
            return Err(InvalidKeyError {
                position: KeyPosition::Entry,
                reason,
            });
        }
        for (i, dep) in dependencies.iter().enumerate() {
            if let Some(reason) = dep.key_violation() {
                return Err(InvalidKeyError {
                    position: KeyPosition::Dependency(i),
                    reason,
                });
            }
        }

        let vertex = self.get_or_create(data);

        for dep in dependencies {
            if let Some(&existing) = self.indices.get(&dep)
                && self.vertices[vertex.index()].parents().contains(&existing)
            {
                continue;
            }

            let parent = self.get_or_create(dep);
            if !self.vertices[parent.index()].children().contains(&vertex) {
                self.vertices[parent.index()].push_child(vertex);
            }
            self.vertices[vertex.index()].push_parent(parent);
        }

        Ok(())
    }

    /// Look up the vertex for `data`, creating it if it does not exist yet
    pub fn get_or_create(&mut self, data: T) -> VertexIndex {
        if let Some(&idx) = self.indices.get(&data) {
            return idx;
        }

        let idx = VertexIndex::new(self.vertices.len());
        self.vertices.push(Vertex::new(data.clone()));
        self.indices.insert(data, idx);
        idx
    }

    pub fn index_of(&self, data: &T) -> Option<VertexIndex> {
        self.indices.get(data).copied()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.indices.contains_key(data)
    }
}

impl<T> DependencyGraph<T> {
    /// All vertices in creation order
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// # Panics
    ///
    /// Panics if `idx` was not produced by this graph.
    pub fn vertex(&self, idx: VertexIndex) -> &Vertex<T> {
        &self.vertices[idx.index()]
    }

    pub fn data(&self, idx: VertexIndex) -> &T {
        self.vertex(idx).data()
    }

    pub fn vertex_indices(&self) -> impl ExactSizeIterator<Item = VertexIndex> + use<T> {
        (0..self.vertices.len()).map(VertexIndex::new)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of parent→child edges, self-loops included
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.parents().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copy the graph into a petgraph `DiGraph` with edges pointing from
    /// dependency to dependent
    ///
    /// Node indices in the result match `VertexIndex::index`.
    pub fn to_petgraph(&self) -> DiGraph<T, ()>
    where
        T: Clone,
    {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        for vertex in &self.vertices {
            graph.add_node(vertex.data().clone());
        }
        for (from, vertex) in self.vertices.iter().enumerate() {
            for child in vertex.children() {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(child.index()), ());
            }
        }
        graph
    }

    /// Strongly connected groups of vertices that contain at least one cycle
    ///
    /// Each group is sorted by vertex index and groups are ordered by their
    /// first vertex.
    pub fn tangles(&self) -> Vec<Vec<VertexIndex>>
    where
        T: Clone,
    {
        let graph = self.to_petgraph();
        let mut tangles: Vec<Vec<VertexIndex>> = tarjan_scc(&graph)
            .into_iter()
            .map(|scc| {
                let mut group: Vec<VertexIndex> = scc
                    .into_iter()
                    .map(|node| VertexIndex::new(node.index()))
                    .collect();
                group.sort();
                group
            })
            .filter(|group| match group.as_slice() {
                [single] => self.vertex(*single).is_self_loop(*single),
                _ => true,
            })
            .collect();
        tangles.sort();
        tangles
    }
}

#[cfg(test)]
mod tests {
    use petgraph::algo::is_cyclic_directed;

    use super::*;

    fn idx(graph: &DependencyGraph<&'static str>, label: &'static str) -> VertexIndex {
        graph.index_of(&label).expect("vertex should exist")
    }

    fn labels(graph: &DependencyGraph<&'static str>, indices: &[VertexIndex]) -> Vec<&'static str> {
        indices.iter().map(|&i| *graph.data(i)).collect()
    }

    fn assert_edges_symmetric<T: VertexKey>(graph: &DependencyGraph<T>) {
        for x in graph.vertex_indices() {
            for y in graph.vertex_indices() {
                let y_child_of_x = graph.vertex(x).children().contains(&y);
                let x_parent_of_y = graph.vertex(y).parents().contains(&x);
                assert_eq!(y_child_of_x, x_parent_of_y, "asymmetric edge {x} -> {y}");
            }
        }
    }

    #[test]
    fn test_add_entry_wires_both_directions() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("B", ["A"]).unwrap();

        let a = idx(&graph, "A");
        let b = idx(&graph, "B");
        assert_eq!(graph.vertex(b).parents(), &[a]);
        assert_eq!(graph.vertex(a).children(), &[b]);
        assert!(graph.vertex(a).parents().is_empty());
        assert!(graph.vertex(b).children().is_empty());
    }

    #[test]
    fn test_forward_references_are_created_on_demand() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("D", ["A", "C", "E"]).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(
            labels(&graph, &graph.vertex_indices().collect::<Vec<_>>()),
            vec!["D", "A", "C", "E"]
        );

        // Declaring E later reuses the vertex created for the reference
        graph.add_entry("E", ["A"]).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(labels(&graph, graph.vertex(idx(&graph, "E")).parents()), vec!["A"]);
    }

    #[test]
    fn test_repeated_entry_is_idempotent() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("H", ["G"]).unwrap();
        let (vertices, edges) = (graph.vertex_count(), graph.edge_count());

        graph.add_entry("H", ["G"]).unwrap();
        graph.add_entry("H", ["G", "G"]).unwrap();

        assert_eq!(graph.vertex_count(), vertices);
        assert_eq!(graph.edge_count(), edges);
        assert_eq!(graph.vertex(idx(&graph, "G")).children().len(), 1);
    }

    #[test]
    fn test_redeclaration_merges_new_dependencies() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("C", ["A"]).unwrap();
        graph.add_entry("C", ["A", "B"]).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(labels(&graph, graph.vertex(idx(&graph, "C")).parents()), vec!["A", "B"]);
    }

    #[test]
    fn test_self_loop_is_recorded_once_each_way() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("I", ["D", "I"]).unwrap();

        let i = idx(&graph, "I");
        assert!(graph.vertex(i).is_self_loop(i));
        assert_eq!(graph.vertex(i).children(), &[i]);
        assert_eq!(labels(&graph, graph.vertex(i).parents()), vec!["D", "I"]);
        assert_edges_symmetric(&graph);
    }

    #[test]
    fn test_empty_dependencies_only_create_vertex() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("A", Vec::new()).unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_invalid_key_leaves_graph_untouched() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("A", Vec::new()).unwrap();

        let err = graph.add_entry("B", ["A", " "]).unwrap_err();
        assert_eq!(err.position, KeyPosition::Dependency(1));
        assert_eq!(err.reason, "blank label");
        assert_eq!(graph.vertex_count(), 1);
        assert!(!graph.contains(&"B"));

        let err = graph.add_entry("", ["A"]).unwrap_err();
        assert_eq!(err.position, KeyPosition::Entry);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_option_keys_reject_none() {
        let mut graph: DependencyGraph<Option<u32>> = DependencyGraph::new();
        assert!(graph.add_entry(Some(1), [None]).is_err());
        assert!(graph.add_entry(Some(1), [Some(2)]).is_ok());
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_edges_stay_symmetric() {
        let mut graph = DependencyGraph::new();
        let entries: [(&str, Vec<&str>); 6] = [
            ("A", vec![]),
            ("B", vec!["A", "E"]),
            ("C", vec!["B", "C"]),
            ("D", vec!["B"]),
            ("E", vec!["D"]),
            ("B", vec!["E", "C"]),
        ];
        for (data, deps) in entries {
            graph.add_entry(data, deps).unwrap();
        }

        assert_edges_symmetric(&graph);
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn test_to_petgraph_preserves_indices_and_direction() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("B", ["A"]).unwrap();

        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 2);
        assert_eq!(pg.edge_count(), 1);
        assert_eq!(pg[NodeIndex::new(0)], "B");
        assert!(pg.contains_edge(NodeIndex::new(1), NodeIndex::new(0)));
        assert!(!is_cyclic_directed(&pg));
    }

    #[test]
    fn test_tangles_group_strongly_connected_vertices() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("A", Vec::new()).unwrap();
        graph.add_entry("B", ["A", "E"]).unwrap();
        graph.add_entry("C", ["B", "C"]).unwrap();
        graph.add_entry("D", ["B"]).unwrap();
        graph.add_entry("E", ["D"]).unwrap();

        let tangles: Vec<Vec<&str>> = graph
            .tangles()
            .iter()
            .map(|group| labels(&graph, group))
            .collect();

        assert_eq!(tangles, vec![vec!["B", "E", "D"], vec!["C"]]);
    }

    #[test]
    fn test_tangles_empty_for_dag() {
        let mut graph = DependencyGraph::new();
        graph.add_entry("B", ["A"]).unwrap();
        graph.add_entry("C", ["A", "B"]).unwrap();

        assert!(graph.tangles().is_empty());
    }
}
