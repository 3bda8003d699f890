use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, ManifestArgs};

#[derive(Parser)]
#[command(
    name = "ferris-loops",
    about = "🎡 Find dependency cycles in labeled graphs",
    long_about = "ferris-loops builds a directed graph from entries that name the values they \
                  depend on, then reports every elementary cycle a depth-first search walks \
                  into. Datasets are TOML manifests with one [[entry]] table per vertex.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the rides for dangerous loops
    ///
    /// Builds one graph per manifest and reports the cycles found in each.
    #[command(
        long_about = "Load every manifest found under the given paths, build a dependency graph \
                      for each one and enumerate its cycles with a depth-first search. Each \
                      cycle is listed in the direction the dependencies were declared. Use \
                      --error-on-cycles in CI to fail when any dataset contains a cycle."
    )]
    Inspect {
        #[command(flatten)]
        manifests: ManifestArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "FERRIS_LOOPS_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Create a spectacular visualization of one dataset
    ///
    /// Renders the dependency graph of a single manifest, highlighting the
    /// vertices and edges that take part in cycles.
    #[command(
        long_about = "Render the dependency graph of a manifest as ASCII art, a Mermaid diagram \
                      or a Graphviz DOT file. Edges point from a dependency to its dependent, \
                      the same direction cycles are reported in."
    )]
    Spectacle {
        /// Manifest file to render
        #[arg(value_name = "MANIFEST", env = "FERRIS_LOOPS_MANIFEST")]
        manifest: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "FERRIS_LOOPS_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "FERRIS_LOOPS_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            env = "FERRIS_LOOPS_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },

    /// Take a ride on the built-in demonstration datasets
    ///
    /// Runs cycle detection on seven small example graphs.
    Figures {
        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "ferris-loops",
            "inspect",
            "graphs",
            "--format",
            "json",
            "--max-cycles",
            "3",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                manifests,
                format,
                cycle_display,
                error_on_cycles,
            } => {
                assert_eq!(manifests.paths, vec![PathBuf::from("graphs")]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(3));
                assert!(error_on_cycles);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_parse_spectacle_without_highlighting() {
        let cli = Cli::try_parse_from([
            "ferris-loops",
            "spectacle",
            "graph.toml",
            "--format",
            "dot",
            "--highlight-cycles",
            "false",
        ])
        .unwrap();

        match cli.command {
            Commands::Spectacle {
                format,
                highlight_cycles,
                ..
            } => {
                assert_eq!(format, GraphFormat::Dot);
                assert!(!highlight_cycles);
            }
            _ => panic!("Expected Spectacle command"),
        }
    }

    #[test]
    fn test_parse_spectacle_defaults() {
        let cli = Cli::try_parse_from(["ferris-loops", "spectacle", "graph.toml"]).unwrap();

        match cli.command {
            Commands::Spectacle {
                manifest,
                format,
                output,
                highlight_cycles,
            } => {
                assert_eq!(manifest, PathBuf::from("graph.toml"));
                assert_eq!(format, GraphFormat::Ascii);
                assert!(output.is_none());
                assert!(highlight_cycles);
            }
            _ => panic!("Expected Spectacle command"),
        }
    }
}
