//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::fmt;
use std::hash::Hash;

/// Position of a vertex in the graph's arena
///
/// Indices are handed out densely in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(usize);

impl VertexIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value that can identify a vertex
///
/// Equality and hashing make it the dedup key. `key_violation` lets a key
/// type reject values that would be ambiguous as labels.
pub trait VertexKey: Eq + Hash + Clone {
    /// Why this value cannot identify a vertex, if it cannot
    fn key_violation(&self) -> Option<&'static str> {
        None
    }
}

fn blank_label(label: &str) -> Option<&'static str> {
    label.trim().is_empty().then_some("blank label")
}

impl VertexKey for String {
    fn key_violation(&self) -> Option<&'static str> {
        blank_label(self)
    }
}

impl VertexKey for &str {
    fn key_violation(&self) -> Option<&'static str> {
        blank_label(self)
    }
}

impl VertexKey for Box<str> {
    fn key_violation(&self) -> Option<&'static str> {
        blank_label(self)
    }
}

impl<K: VertexKey> VertexKey for Option<K> {
    fn key_violation(&self) -> Option<&'static str> {
        match self {
            Some(key) => key.key_violation(),
            None => Some("missing value"),
        }
    }
}

macro_rules! always_valid_key {
    ($($ty:ty),* $(,)?) => {
        $(impl VertexKey for $ty {})*
    };
}

always_valid_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool
);

/// A vertex and its adjacency in both directions
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    data: T,
    parents: Vec<VertexIndex>,
    children: Vec<VertexIndex>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Vertices this one depends on, in declaration order
    pub fn parents(&self) -> &[VertexIndex] {
        &self.parents
    }

    /// Vertices that depend on this one, in declaration order
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Parents followed by any children that are not also parents
    pub fn neighbors(&self) -> Vec<VertexIndex> {
        let mut neighbors = Vec::with_capacity(self.parents.len() + self.children.len());
        for &idx in self.parents.iter().chain(&self.children) {
            if !neighbors.contains(&idx) {
                neighbors.push(idx);
            }
        }
        neighbors
    }

    pub fn is_self_loop(&self, own_index: VertexIndex) -> bool {
        self.children.contains(&own_index)
    }

    pub(crate) fn push_parent(&mut self, parent: VertexIndex) {
        self.parents.push(parent);
    }

    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
