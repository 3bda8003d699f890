//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions annotations for CI logs

pub mod github;
pub mod human;
pub mod json;

use crate::core::DatasetAnalysis;
use crate::error::FerrisLoopsError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report covering every analysed dataset, in order
    fn generate_report(&self, analyses: &[DatasetAnalysis]) -> Result<String, FerrisLoopsError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::DatasetAnalysis;

    pub fn acyclic() -> DatasetAnalysis {
        DatasetAnalysis {
            name: "Figure 2".to_string(),
            vertex_count: 5,
            edge_count: 5,
            cycles: Vec::new(),
            tangles: Vec::new(),
        }
    }

    pub fn cyclic() -> DatasetAnalysis {
        DatasetAnalysis {
            name: "Figure 5".to_string(),
            vertex_count: 5,
            edge_count: 6,
            cycles: vec![
                vec!["C".to_string()],
                vec!["B".to_string(), "D".to_string(), "E".to_string()],
            ],
            tangles: vec![
                vec!["B".to_string(), "E".to_string(), "D".to_string()],
                vec!["C".to_string()],
            ],
        }
    }
}
