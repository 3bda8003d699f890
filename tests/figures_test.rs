//! The built-in figures produce their documented cycles

use ferris_loops::analysis::analyze_dataset;
use ferris_loops::figures::builtin_figures;
use pretty_assertions::assert_eq;

fn owned(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| group.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_builtin_figures_cycles() {
    let expected: [&[&[&str]]; 7] = [
        &[&["A", "B", "C"]],
        &[],
        &[],
        &[&["I"], &["E", "F", "G", "H"]],
        &[&["C"], &["B", "D", "E"]],
        &[&["E", "F", "G", "H"], &["I"]],
        &[],
    ];

    let figures = builtin_figures();
    assert_eq!(figures.len(), expected.len());

    for (figure, cycles) in figures.into_iter().zip(expected) {
        let name = figure.name.clone();
        let analysis = analyze_dataset(&figure.name, figure.entries).unwrap();
        assert_eq!(analysis.cycles, owned(cycles), "{name}");
    }
}

#[test]
fn test_builtin_figures_tangles() {
    let figures = builtin_figures();

    let tangles: Vec<Vec<Vec<String>>> = figures
        .into_iter()
        .map(|figure| analyze_dataset(&figure.name, figure.entries).unwrap().tangles)
        .collect();

    assert_eq!(tangles[0], owned(&[&["A", "C", "B"]]));
    assert!(tangles[1].is_empty());
    assert_eq!(tangles[3], owned(&[&["E", "H", "F", "G"], &["I"]]));
    assert_eq!(tangles[4], owned(&[&["B", "E", "D"], &["C"]]));
    assert_eq!(tangles[5], tangles[3]);
}

#[test]
fn test_repeated_declaration_adds_no_edges() {
    let figures = builtin_figures();
    let figure_four = &figures[3];

    let analysis = analyze_dataset(&figure_four.name, figure_four.entries.clone()).unwrap();
    assert_eq!(analysis.vertex_count, 9);
    assert_eq!(analysis.edge_count, 10);
}

#[test]
fn test_dotted_labels_are_plain_vertices() {
    let figures = builtin_figures();
    let analysis = analyze_dataset(&figures[6].name, figures[6].entries.clone()).unwrap();

    assert_eq!(analysis.vertex_count, 2);
    assert_eq!(analysis.edge_count, 1);
    assert!(!analysis.has_cycles());
}
