//! Figures command configuration

use crate::cli::OutputFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct FiguresConfig {
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

impl FiguresConfig {
    pub fn builder() -> FiguresConfigBuilder {
        FiguresConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct FiguresConfigBuilder {
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
}

impl FiguresConfigBuilder {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for FiguresConfigBuilder {
    type Config = FiguresConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopsError> {
        Ok(FiguresConfig {
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
        })
    }
}
