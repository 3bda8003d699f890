//! Figures command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analysis::analyze_dataset;
use crate::config::FiguresConfig;
use crate::executors::{CommandExecutor, print_report};
use crate::figures::builtin_figures;

pub struct FiguresExecutor;

impl CommandExecutor for FiguresExecutor {
    type Config = FiguresConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Taking a ride on the built-in figures...",
            style("🎡").cyan()
        );

        let analyses = builtin_figures()
            .into_iter()
            .map(|figure| {
                analyze_dataset(&figure.name, figure.entries)
                    .wrap_err_with(|| format!("Failed to analyse '{}'", figure.name))
            })
            .collect::<Result<Vec<_>>>()?;

        print_report(config.format, config.max_cycles, &analyses)
    }
}
