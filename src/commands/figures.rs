//! Figures command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::FiguresConfig;
use crate::error::FerrisLoopsError;

impl FromCommand for FiguresConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisLoopsError> {
        match command {
            Commands::Figures {
                format,
                cycle_display,
            } => FiguresConfig::builder()
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(FerrisLoopsError::ConfigurationError {
                message: "Invalid command type for FiguresConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FiguresConfig);

/// Execute the figures command on the built-in datasets
pub fn execute_figures_command(command: Commands) -> Result<()> {
    let config = FiguresConfig::from_command(command)
        .wrap_err("Failed to parse figures command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::figures::FiguresExecutor;
    FiguresExecutor::execute(config)
}
