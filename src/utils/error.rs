use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Numeral string is missing")]
    NullInput,

    #[error("Numeral string cannot be empty")]
    EmptyInput,

    #[error("Numeral string contains invalid char '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error(
        "Numeral string must use subtractive notation: found '{symbol}' four times in a row at index {index} (e.g. 4 is IV rather than IIII)"
    )]
    InvalidNotation { symbol: char, index: usize },

    #[error("Value {value} is out of range: must be between 1 and 3000")]
    OutOfRange { value: i64 },

    #[error("'{input}' is not an integer")]
    InvalidNumber { input: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Numeral(#[from] NumeralError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No input values were given")]
    MissingInput,
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Numeral(e) => format!("Conversion failed: {}", e),
            AppError::Io(e) => format!("Could not read or write a file: {}", e),
            AppError::Serialization(e) => format!("Could not render output: {}", e),
            AppError::ConfigParse { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            AppError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AppError::MissingInput => {
                "Nothing to convert: pass values as arguments or with --file".to_string()
            }
        }
    }

    /// Process exit code: 1 for conversion failures, 2 for usage and setup problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Numeral(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumeralError>;
pub type AppResult<T> = std::result::Result<T, AppError>;
