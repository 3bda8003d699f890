//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// One caller record: a value and the values it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub data: T,
    pub dependencies: Vec<T>,
}

impl<T> Entry<T> {
    pub fn new(data: T, dependencies: Vec<T>) -> Self {
        Self { data, dependencies }
    }

    /// An entry without dependencies
    pub fn standalone(data: T) -> Self {
        Self {
            data,
            dependencies: Vec::new(),
        }
    }
}

impl<T> From<(T, Vec<T>)> for Entry<T> {
    fn from((data, dependencies): (T, Vec<T>)) -> Self {
        Self::new(data, dependencies)
    }
}

impl<T, const N: usize> From<(T, [T; N])> for Entry<T> {
    fn from((data, dependencies): (T, [T; N])) -> Self {
        Self::new(data, dependencies.into())
    }
}

/// Result of building and inspecting one dataset, with labels resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetAnalysis {
    pub name: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub cycles: Vec<Vec<String>>,
    pub tangles: Vec<Vec<String>>,
}

impl DatasetAnalysis {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_tuples() {
        let from_vec: Entry<&str> = ("B", vec!["A"]).into();
        let from_array: Entry<&str> = ("B", ["A"]).into();

        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec.dependencies, vec!["A"]);
    }

    #[test]
    fn test_standalone_entry_has_no_dependencies() {
        let entry = Entry::standalone(7u32);
        assert_eq!(entry.data, 7);
        assert!(entry.dependencies.is_empty());
    }
}
