//! One-shot analysis of a dataset: build, detect, resolve labels

use std::fmt::Display;

use crate::core::{DatasetAnalysis, Entry};
use crate::detector::CycleDetector;
use crate::error::FerrisLoopsError;
use crate::graph::{DependencyGraph, VertexIndex, VertexKey};

/// Build the graph for `entries`, detect its cycles and collect the results
/// with every vertex rendered as a label
pub fn analyze_dataset<T, I>(name: &str, entries: I) -> Result<DatasetAnalysis, FerrisLoopsError>
where
    T: VertexKey + Display,
    I: IntoIterator,
    I::Item: Into<Entry<T>>,
{
    let graph = crate::build_graph(entries)?;
    Ok(analyze_graph(name, &graph))
}

/// Detect the cycles of an already built graph and collect the results
pub fn analyze_graph<T>(name: &str, graph: &DependencyGraph<T>) -> DatasetAnalysis
where
    T: VertexKey + Display,
{
    let mut detector = CycleDetector::new();
    detector.detect_cycles(graph);

    let render = |indices: &[VertexIndex]| -> Vec<String> {
        indices
            .iter()
            .map(|&idx| graph.data(idx).to_string())
            .collect()
    };

    DatasetAnalysis {
        name: name.to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        cycles: detector
            .cycles()
            .iter()
            .map(|cycle| render(cycle.vertices()))
            .collect(),
        tangles: graph.tangles().iter().map(|group| render(group)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_dataset_resolves_labels() {
        let analysis =
            analyze_dataset("numbers", [(1u32, vec![3]), (2, vec![1]), (3, vec![2])]).unwrap();

        assert_eq!(analysis.name, "numbers");
        assert_eq!(analysis.vertex_count, 3);
        assert_eq!(analysis.edge_count, 3);
        assert_eq!(analysis.cycles, vec![vec!["1", "2", "3"]]);
        assert_eq!(analysis.tangles, vec![vec!["1", "3", "2"]]);
    }

    #[test]
    fn test_analyze_dataset_propagates_rejected_entries() {
        let err = analyze_dataset("bad", [("A", vec!["B"]), ("", vec![])]).unwrap_err();

        match err {
            FerrisLoopsError::InvalidEntry { index, .. } => assert_eq!(index, 1),
            other => panic!("Expected InvalidEntry, got {other:?}"),
        }
    }
}
