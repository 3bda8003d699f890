//! # Cycle Detection Module
//!
//! This module enumerates the elementary cycles of a [`DependencyGraph`]
//! with a depth-first search.
//!
//! ## Algorithm
//!
//! Every vertex that has not been visited yet becomes the root of a new
//! depth-first walk along parent→child edges. The vertices on the current
//! root-to-frontier path form the recursion stack; reaching a child that is
//! still on it closes a cycle, which is the slice of the path from that
//! child to the top. Visited vertices are never explored again, so the walk
//! is O(V + E). Cycles whose vertex sequence is identical to one already
//! found are dropped; rotations of a sequence count as different cycles.
//!
//! The walk uses an explicit work stack, so deep graphs cannot overflow the
//! native call stack.
//!
//! [`DependencyGraph`]: crate::graph::DependencyGraph
//!
//! ## Example
//!
//! ```
//! use ferris_loops::detector::CycleDetector;
//! use ferris_loops::graph::DependencyGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DependencyGraph::new();
//! graph.add_entry("A", ["C"])?;
//! graph.add_entry("B", ["A"])?;
//! graph.add_entry("C", ["B"])?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.labeled_cycles(&graph), vec![vec!["A", "B", "C"]]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
