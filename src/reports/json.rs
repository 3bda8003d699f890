//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::DatasetAnalysis;
use crate::error::FerrisLoopsError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analyses: &[DatasetAnalysis]) -> Result<String, FerrisLoopsError> {
        let cycle_count: usize = analyses.iter().map(DatasetAnalysis::cycle_count).sum();

        let report = json!({
            "has_cycles": cycle_count > 0,
            "cycle_count": cycle_count,
            "datasets": analyses,
        });

        serde_json::to_string_pretty(&report).map_err(FerrisLoopsError::Json)
    }
}
