//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleOptions;
use crate::error::FerrisLoopsError;

impl FromCommand for SpectacleOptions {
    fn from_command(command: Commands) -> Result<Self, FerrisLoopsError> {
        match command {
            Commands::Spectacle {
                manifest,
                format,
                output,
                highlight_cycles,
            } => SpectacleOptions::builder()
                .with_manifest(manifest)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(FerrisLoopsError::ConfigurationError {
                message: "Invalid command type for SpectacleOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleOptions);

/// Execute the spectacle command for rendering a dataset's graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let options = SpectacleOptions::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(options)
}
