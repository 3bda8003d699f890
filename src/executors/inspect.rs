//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analysis::analyze_graph;
use crate::config::InspectConfig;
use crate::discovery::ManifestDiscovery;
use crate::executors::{CommandExecutor, print_report};
use crate::manifest::GraphManifest;
use crate::progress::ProgressReporter;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting the rides for dependency cycles...\n",
            style("🎡").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        let manifests = ManifestDiscovery::new().discover_all(&config.paths, progress.as_ref());
        if let Some(p) = progress.as_mut() {
            p.finish_discovery(manifests.len());
        }

        if manifests.is_empty() {
            eprintln!("{} No manifests found to inspect", style("ℹ").blue());
            return Ok(());
        }

        if let Some(p) = progress.as_mut() {
            p.start_graph_building(manifests.len());
        }

        let mut analyses = Vec::with_capacity(manifests.len());
        for path in &manifests {
            let manifest = GraphManifest::parse_file(path)
                .wrap_err_with(|| format!("Failed to load manifest '{}'", path.display()))?;
            let name = manifest.display_name();

            let graph = crate::build_graph(manifest.entries())
                .wrap_err_with(|| format!("Failed to build graph for '{name}'"))?;

            if let Some(p) = progress.as_ref() {
                p.update_graph_progress(&name);
            }
            analyses.push(analyze_graph(&name, &graph));
        }

        if let Some(p) = progress.as_mut() {
            p.finish_graph_building();
            p.start_cycle_detection();
            p.finish_cycle_detection(analyses.iter().map(|a| a.cycle_count()).sum());
        }

        print_report(config.format, config.max_cycles, &analyses)?;

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && analyses.iter().any(|a| a.has_cycles()) {
            std::process::exit(1);
        }

        Ok(())
    }
}
