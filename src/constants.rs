//! Configuration constants for ferris-loops
//!
//! This module contains the constants used throughout the application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the ferris wheel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎡 ", // Standard ferris wheel
        "🎡⊙", // With center dot
        "🎡◐", // Quarter filled
        "🎡◓", // Half filled
        "🎡◑", // Three quarters
        "🎡◒", // Another quarter
        "🎡○", // Empty circle
        "🎡●", // Full circle
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Manifest discovery configuration
pub mod manifest {
    /// File extension searched for inside directories
    pub const EXTENSION: &str = "toml";
}
