//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Manifest location arguments
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Manifest files, directories or glob patterns (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "FERRIS_LOOPS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display per dataset (shows all by default)
    #[arg(long, env = "FERRIS_LOOPS_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl ManifestArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopsError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::FerrisLoopsError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::FerrisLoopsError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::FerrisLoopsError {
    crate::error::FerrisLoopsError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_args_get_paths_empty() {
        let args = ManifestArgs { paths: vec![] };

        let paths = args.get_paths();
        assert_eq!(paths.len(), 1);
        // Should default to current directory
        assert!(paths[0].is_absolute() || paths[0] == std::path::Path::new("."));
    }

    #[test]
    fn test_manifest_args_get_paths_with_values() {
        let test_paths = vec![PathBuf::from("/tmp/a.toml"), PathBuf::from("/tmp/graphs")];

        let args = ManifestArgs {
            paths: test_paths.clone(),
        };

        assert_eq!(args.get_paths(), test_paths);
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("paths").to_string(),
            "Configuration error: Missing required field: paths"
        );
    }
}
