pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, RunSettings};
pub use crate::core::{
    batch::BatchConverter,
    converter::{decode, decode_opt, encode, RomanConverter},
    numeral::RomanNumeral,
    report::render,
};
pub use crate::domain::model::{BatchSummary, Conversion, Direction, OutputFormat};
pub use crate::domain::ports::NumeralConverter;
pub use crate::utils::error::{AppError, AppResult, NumeralError, Result};
