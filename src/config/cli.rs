use crate::config::toml_config::TomlConfig;
use crate::config::RunSettings;
use crate::core::batch::BatchConverter;
use crate::core::converter::RomanConverter;
use crate::core::report::render;
use crate::domain::model::{Direction, OutputFormat};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman")]
#[command(about = "Convert between integers (1-3000) and Roman numerals")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Integers to encode or numerals to decode
    pub inputs: Vec<String>,

    /// Read additional inputs from a file, one per line
    #[arg(long)]
    pub file: Option<String>,

    #[arg(long, value_enum)]
    pub direction: Option<Direction>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the binary prints to stdout and the code it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    pub exit_code: i32,
}

impl CliConfig {
    /// Loads the optional config file and merges the flags over it.
    pub fn resolve_settings(&self) -> AppResult<RunSettings> {
        let file_config = self.load_file_config()?;
        Ok(self.settings(&file_config))
    }

    /// Converts every collected input. Exits 0 when all items convert and 1
    /// when any item fails; setup problems surface as `Err` (exit code 2).
    pub fn run(&self, settings: &RunSettings) -> AppResult<RunOutcome> {
        let inputs = self.collect_inputs()?;

        let batch = BatchConverter::new(RomanConverter::new(), settings.direction);
        let summary = batch.run(&inputs);

        Ok(RunOutcome {
            output: render(&summary, settings.format)?,
            exit_code: if summary.failed > 0 { 1 } else { 0 },
        })
    }

    pub fn load_file_config(&self) -> AppResult<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Flags win over the config file.
    pub fn settings(&self, file_config: &TomlConfig) -> RunSettings {
        RunSettings {
            direction: self.direction.unwrap_or_else(|| file_config.direction()),
            format: self.format.unwrap_or_else(|| file_config.output_format()),
            verbose: self.verbose || file_config.verbose(),
            json_logs: file_config.json_logs(),
        }
    }

    /// Positional inputs first, then non-blank lines of `--file`.
    pub fn collect_inputs(&self) -> AppResult<Vec<String>> {
        let mut inputs = self.inputs.clone();

        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)?;
            inputs.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }

        if inputs.is_empty() {
            return Err(AppError::MissingInput);
        }
        Ok(inputs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> AppResult<()> {
        if let Some(path) = &self.file {
            validate_path("file", path)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
