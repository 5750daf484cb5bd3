use crate::core::{BatchSummary, Conversion, Direction, NumeralConverter};
use crate::utils::error::{NumeralError, Result};
use std::num::IntErrorKind;

pub struct BatchConverter<C: NumeralConverter> {
    converter: C,
    direction: Direction,
}

impl<C: NumeralConverter> BatchConverter<C> {
    pub fn new(converter: C, direction: Direction) -> Self {
        Self {
            converter,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Converts every input in order. A failing item is recorded and the
    /// batch carries on.
    pub fn run(&self, inputs: &[String]) -> BatchSummary {
        tracing::info!(
            "Converting {} value(s), direction: {}",
            inputs.len(),
            self.direction
        );

        let mut summary = BatchSummary::default();
        for input in inputs {
            let conversion = self.convert_one(input);
            if conversion.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
            summary.conversions.push(conversion);
        }
        summary.total = summary.conversions.len();

        tracing::info!(
            "Converted {} value(s): {} succeeded, {} failed",
            summary.total,
            summary.succeeded,
            summary.failed
        );
        summary
    }

    pub fn convert_one(&self, input: &str) -> Conversion {
        let text = input.trim_matches(|c: char| c.is_ascii_whitespace());
        let direction = self.direction.resolve(text);

        let result = match direction {
            Direction::Encode => self.encode_text(text),
            _ => self
                .converter
                .parse(text)
                .map(|value| value.to_string()),
        };

        match result {
            Ok(output) => {
                tracing::debug!("{} ({}) -> {}", text, direction, output);
                Conversion {
                    input: text.to_string(),
                    direction,
                    output: Some(output),
                    error: None,
                }
            }
            Err(e) => {
                tracing::debug!("{} ({}) failed: {}", text, direction, e);
                Conversion {
                    input: text.to_string(),
                    direction,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn encode_text(&self, text: &str) -> Result<String> {
        let number: i64 = text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => NumeralError::OutOfRange { value: i64::MAX },
            IntErrorKind::NegOverflow => NumeralError::OutOfRange { value: i64::MIN },
            _ => NumeralError::InvalidNumber {
                input: text.to_string(),
            },
        })?;
        self.converter.encode(number)
    }
}
