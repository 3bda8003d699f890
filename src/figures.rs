//! Built-in demonstration datasets
//!
//! Seven small graphs covering the interesting cases: a plain cycle, DAGs,
//! self-loops, repeated declarations, disconnected components and dotted
//! labels.

use crate::core::Entry;

/// A named dataset of entries
#[derive(Debug, Clone)]
pub struct Figure {
    pub name: String,
    pub entries: Vec<Entry<String>>,
}

fn figure(name: &str, entries: &[(&str, &[&str])]) -> Figure {
    Figure {
        name: name.to_string(),
        entries: entries
            .iter()
            .map(|(data, deps)| {
                Entry::new(
                    data.to_string(),
                    deps.iter().map(|dep| dep.to_string()).collect(),
                )
            })
            .collect(),
    }
}

/// The seven demonstration datasets, in order
pub fn builtin_figures() -> Vec<Figure> {
    vec![
        figure("Figure 1", &[("A", &["C"]), ("B", &["A"]), ("C", &["B"])]),
        figure("Figure 2", &[("A", &[]), ("B", &["A"]), ("C", &["A", "B"])]),
        figure(
            "Figure 3",
            &[
                ("A", &[]),
                ("B", &["A"]),
                ("C", &["A", "B"]),
                ("D", &["A", "C", "E"]),
                ("E", &["A"]),
            ],
        ),
        figure(
            "Figure 4",
            &[
                ("A", &[]),
                ("B", &["A"]),
                ("C", &["B"]),
                ("D", &["C"]),
                ("E", &["C", "H"]),
                ("F", &["E"]),
                ("G", &["F"]),
                ("H", &["G"]),
                ("H", &["G"]),
                ("I", &["D", "I"]),
            ],
        ),
        figure(
            "Figure 5",
            &[
                ("A", &[]),
                ("B", &["A", "E"]),
                ("C", &["B", "C"]),
                ("D", &["B"]),
                ("E", &["D"]),
            ],
        ),
        figure(
            "Figure 6",
            &[
                ("A", &[]),
                ("B", &["A"]),
                ("C", &[]),
                ("D", &[]),
                ("E", &["C", "H"]),
                ("F", &["E"]),
                ("G", &["F"]),
                ("H", &["G"]),
                ("H", &["G"]),
                ("I", &["D", "I"]),
            ],
        ),
        figure("Figure 7", &[("B.val1", &["A.val1"])]),
    ]
}
