pub mod batch;
pub mod converter;
pub mod numeral;
pub mod report;

pub use crate::domain::model::{BatchSummary, Conversion, Direction, OutputFormat};
pub use crate::domain::ports::NumeralConverter;
pub use crate::utils::error::Result;
