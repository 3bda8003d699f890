//! Core data types and structures
//!
//! This module contains the fundamental records exchanged between the
//! library and its callers, separated from the graph and detector logic.

pub mod types;

pub use types::*;
