//! Command implementations for ferris-loops CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Inspect the rides for dangerous loops
//! - spectacle: Create a spectacular visualization of one dataset
//! - figures: Take a ride on the built-in demonstration datasets

pub mod figures;
pub mod inspect;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
        Commands::Figures { .. } => figures::execute_figures_command(command),
    }
}
