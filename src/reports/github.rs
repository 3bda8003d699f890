//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::DatasetAnalysis;
use crate::error::FerrisLoopsError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, analyses: &[DatasetAnalysis]) -> Result<String, FerrisLoopsError> {
        let mut output = String::new();

        let total: usize = analyses.iter().map(DatasetAnalysis::cycle_count).sum();
        if total == 0 {
            writeln!(
                output,
                "::notice title=Dependency Check::No dependency cycles detected! ✅"
            )?;
            return Ok(output);
        }

        for analysis in analyses.iter().filter(|a| a.has_cycles()) {
            writeln!(
                output,
                "::error title=Dependency Cycles::{} has {} dependency {}",
                analysis.name,
                analysis.cycle_count(),
                pluralize("cycle", analysis.cycle_count())
            )?;

            for (i, cycle) in analysis.cycles.iter().enumerate() {
                writeln!(
                    output,
                    "::warning title={} cycle {}::{}",
                    analysis.name,
                    i + 1,
                    cycle.join(" → ")
                )?;
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break these cycles, remove at least one \
             dependency from each cycle."
        )?;

        Ok(output)
    }
}
