//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::DatasetAnalysis;
use crate::error::FerrisLoopsError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn write_dataset(
        &self,
        output: &mut String,
        analysis: &DatasetAnalysis,
    ) -> Result<(), FerrisLoopsError> {
        writeln!(
            output,
            "\n{} {} ({} {}, {} {})",
            style("🎡").cyan(),
            style(&analysis.name).bold(),
            analysis.vertex_count,
            if analysis.vertex_count == 1 {
                "vertex"
            } else {
                "vertices"
            },
            analysis.edge_count,
            pluralize("edge", analysis.edge_count)
        )?;

        if !analysis.has_cycles() {
            writeln!(
                output,
                "  {} No dependency cycles detected",
                style("✅").green().bold()
            )?;
            return Ok(());
        }

        let total_cycles = analysis.cycle_count();
        writeln!(
            output,
            "  {} {} {} detected",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            pluralize("cycle", total_cycles)
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);
        for (i, cycle) in analysis.cycles.iter().take(limit).enumerate() {
            writeln!(
                output,
                "    {} Cycle #{}: {}",
                style("🔄").yellow(),
                i + 1,
                style(cycle.join(" → ")).yellow()
            )?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "    {} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        if !analysis.tangles.is_empty() {
            writeln!(
                output,
                "  {} Strongly connected {}:",
                style("🔗").cyan(),
                pluralize("group", analysis.tangles.len())
            )?;
            for tangle in &analysis.tangles {
                writeln!(output, "    {} {}", style("•").dim(), tangle.join(", "))?;
            }
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, analyses: &[DatasetAnalysis]) -> Result<String, FerrisLoopsError> {
        let mut output = String::new();

        for analysis in analyses {
            self.write_dataset(&mut output, analysis)?;
        }

        let cyclic = analyses.iter().filter(|a| a.has_cycles()).count();
        if cyclic == 0 {
            write!(
                output,
                "\n{} No dependency cycles detected! Every dataset has a clean dependency \
                 structure.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} To break these cycles, remove at least one dependency from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Vertices shared by several cycles are the cheapest place to start.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
