use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Where a rejected key appeared inside an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPosition {
    /// The entry's own data value
    Entry,
    /// The dependency at this position in the entry's dependency list
    Dependency(usize),
}

impl fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPosition::Entry => write!(f, "entry label"),
            KeyPosition::Dependency(i) => write!(f, "dependency #{}", i + 1),
        }
    }
}

/// A value that cannot identify a vertex
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Invalid vertex key in {position}: {reason}")]
#[diagnostic(
    code(ferris_loops::invalid_key),
    help("Every entry and every dependency needs a non-blank label")
)]
pub struct InvalidKeyError {
    pub position: KeyPosition,
    pub reason: &'static str,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(ferris_loops::manifest_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum FerrisLoopsError {
    #[error("Entry #{} was rejected", .index + 1)]
    #[diagnostic(code(ferris_loops::invalid_entry))]
    InvalidEntry {
        /// Zero-based position of the entry in the batch
        index: usize,
        #[source]
        #[diagnostic_source]
        source: InvalidKeyError,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(ferris_loops::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Manifest '{path}' declares no entries")]
    #[diagnostic(
        code(ferris_loops::empty_manifest),
        help("Add at least one [[entry]] table with a `name` key")
    )]
    EmptyManifest { path: PathBuf },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(ferris_loops::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ferris_loops::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(ferris_loops::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ferris_loops::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
