#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{Direction, OutputFormat};

/// Effective settings for one run after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSettings {
    pub direction: Direction,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}
