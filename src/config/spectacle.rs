//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct SpectacleOptions {
    pub manifest: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl SpectacleOptions {
    pub fn builder() -> SpectacleOptionsBuilder {
        SpectacleOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleOptionsBuilder {
    manifest: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl SpectacleOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleOptionsBuilder {
    type Config = SpectacleOptions;

    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopsError> {
        Ok(SpectacleOptions {
            manifest: self.manifest.ok_or_else(|| missing_field("manifest"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            highlight_cycles: self
                .highlight_cycles
                .ok_or_else(|| missing_field("highlight_cycles"))?,
        })
    }
}
