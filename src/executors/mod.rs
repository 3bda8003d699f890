//! Command executors that handle the actual logic for each command

pub mod figures;
pub mod inspect;
pub mod spectacle;

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::core::DatasetAnalysis;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Render `analyses` in the requested format and print the report to stdout
fn print_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    analyses: &[DatasetAnalysis],
) -> Result<()> {
    let report = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(analyses),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(analyses),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(analyses),
    }
    .wrap_err("Failed to generate report")?;

    print!("{report}");
    Ok(())
}
