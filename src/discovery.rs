use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::constants::manifest::EXTENSION;
use crate::progress::ProgressReporter;

/// Resolves command-line paths to manifest files
///
/// Files are taken as given, directories are searched recursively for
/// `*.toml` files and arguments containing glob metacharacters are expanded.
pub struct ManifestDiscovery {
    discovered: BTreeSet<PathBuf>,
}

impl Default for ManifestDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestDiscovery {
    pub fn new() -> Self {
        Self {
            discovered: BTreeSet::new(),
        }
    }

    /// Discover all manifests under the given paths, sorted and deduplicated
    pub fn discover_all(
        mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        for path in paths {
            let raw = path.to_string_lossy();
            if is_glob_pattern(&raw) {
                self.expand_glob(&raw, progress);
                continue;
            }

            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_dir() {
                self.discover_in_dir(path, progress);
            } else {
                self.add(path.to_path_buf(), progress);
            }
        }

        self.discovered.into_iter().collect()
    }

    fn expand_glob(&mut self, pattern: &str, progress: Option<&ProgressReporter>) {
        match glob::glob(pattern) {
            Ok(paths) => {
                for path in paths.flatten() {
                    if path.is_dir() {
                        self.discover_in_dir(&path, progress);
                    } else if path.is_file() {
                        self.add(path, progress);
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    style("⚠").yellow(),
                    pattern,
                    e
                );
            }
        }
    }

    fn discover_in_dir(&mut self, dir: &Path, progress: Option<&ProgressReporter>) {
        let manifests = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                name != "target" && name != ".git"
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == EXTENSION));

        for manifest in manifests {
            self.add(manifest, progress);
        }
    }

    fn add(&mut self, path: PathBuf, progress: Option<&ProgressReporter>) {
        if let Some(p) = progress {
            p.checking_manifest(&path);
        }
        self.discovered.insert(path);
    }
}

fn is_glob_pattern(raw: &str) -> bool {
    raw.contains(['*', '?', '['])
}

/// Discover manifests without progress reporting
pub fn discover_manifests(paths: &[PathBuf]) -> Vec<PathBuf> {
    ManifestDiscovery::new().discover_all(paths, None)
}
