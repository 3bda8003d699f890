//! TOML manifests describing one dataset of entries
//!
//! ```toml
//! name = "Figure 1"
//!
//! [[entry]]
//! name = "A"
//! depends_on = ["C"]
//! ```

use std::path::{Path, PathBuf};

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::core::Entry;
use crate::error::{FerrisLoopsError, ManifestParseError};

#[derive(Debug, Clone, Deserialize)]
pub struct GraphManifest {
    pub name: Option<String>,
    #[serde(default, rename = "entry")]
    pub entries: Vec<ManifestEntry>,
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl GraphManifest {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FerrisLoopsError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(path, &content)
    }

    /// Parse manifest text; `path` is only used for naming and diagnostics
    pub fn parse_str(path: &Path, content: &str) -> Result<Self> {
        let manifest: GraphManifest = toml::from_str(content).map_err(|e| {
            // Try to extract span information from the error
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            FerrisLoopsError::ManifestParseError(Box::new(ManifestParseError {
                file: path.display().to_string(),
                source_code: NamedSource::new(path.display().to_string(), content.to_string()),
                span,
                source: e,
            }))
        })?;

        if manifest.entries.is_empty() {
            return Err(FerrisLoopsError::EmptyManifest {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(GraphManifest {
            path: path.to_path_buf(),
            ..manifest
        })
    }

    /// Dataset name, falling back to the file stem
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }

    /// Entries in file order
    pub fn entries(&self) -> impl Iterator<Item = Entry<String>> + '_ {
        self.entries
            .iter()
            .map(|entry| Entry::new(entry.name.clone(), entry.depends_on.clone()))
    }
}
