//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::SpectacleOptions;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::manifest::GraphManifest;

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let manifest = GraphManifest::parse_file(&config.manifest).wrap_err_with(|| {
            format!("Failed to load manifest '{}'", config.manifest.display())
        })?;
        let graph = crate::build_graph(manifest.entries())
            .wrap_err_with(|| format!("Failed to build graph for '{}'", manifest.display_name()))?;

        // Detect cycles if highlighting is requested
        let cycles = if config.highlight_cycles {
            let mut detector = CycleDetector::new();
            detector.detect_cycles(&graph);
            detector.cycles().to_vec()
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        // Render based on format
        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
