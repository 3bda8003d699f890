//! # Configuration Module
//!
//! This module provides configuration structures for all ferris-loops
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command
//! - **SpectacleOptions**: Configuration for the `spectacle` command
//! - **FiguresConfig**: Configuration for the `figures` command
//!
//! ## Example
//!
//! ```
//! use ferris_loops::ConfigBuilder;
//! use ferris_loops::cli::OutputFormat;
//! use ferris_loops::config::InspectConfig;
//!
//! let config = InspectConfig::builder()
//!     .with_paths(vec![".".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.error_on_cycles);
//! ```

pub mod figures;
pub mod inspect;
pub mod spectacle;

pub use figures::FiguresConfig;
pub use inspect::InspectConfig;
pub use spectacle::SpectacleOptions;
