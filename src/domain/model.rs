use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 3000;

/// One row of the numeral table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub value: u32,
    pub symbol: char,
    /// Index into [`NUMERALS`] of the symbol that may precede this one to
    /// subtract from it (I before V, X before C, ...).
    pub subtractive: Option<usize>,
}

impl Numeral {
    const fn new(value: u32, symbol: char, subtractive: Option<usize>) -> Self {
        Self {
            value,
            symbol,
            subtractive,
        }
    }

    pub fn partner(&self) -> Option<&'static Numeral> {
        self.subtractive.map(|index| &NUMERALS[index])
    }
}

const I: usize = 0;
const X: usize = 2;
const C: usize = 4;

/// Ordered by ascending value.
pub static NUMERALS: [Numeral; 7] = [
    Numeral::new(1, 'I', None),
    Numeral::new(5, 'V', Some(I)),
    Numeral::new(10, 'X', Some(I)),
    Numeral::new(50, 'L', Some(X)),
    Numeral::new(100, 'C', Some(X)),
    Numeral::new(500, 'D', Some(C)),
    Numeral::new(1000, 'M', Some(C)),
];

/// Position of `symbol` in [`NUMERALS`]. Lookup is case-sensitive.
pub fn numeral_index(symbol: char) -> Option<usize> {
    NUMERALS.iter().position(|numeral| numeral.symbol == symbol)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
    #[default]
    Auto,
}

impl Direction {
    pub const NAMES: [&'static str; 3] = ["auto", "encode", "decode"];

    /// Picks encode for integer-looking text and decode for everything else.
    pub fn resolve(self, input: &str) -> Direction {
        match self {
            Direction::Auto => {
                let digits = input.strip_prefix(['-', '+']).unwrap_or(input);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    Direction::Encode
                } else {
                    Direction::Decode
                }
            }
            fixed => fixed,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
            Direction::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Direction::Auto),
            "encode" => Ok(Direction::Encode),
            "decode" => Ok(Direction::Decode),
            other => Err(format!(
                "unknown direction '{}', expected one of: {}",
                other,
                Direction::NAMES.join(", ")
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected one of: {}",
                other,
                OutputFormat::NAMES.join(", ")
            )),
        }
    }
}

/// Outcome of converting one batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub direction: Direction,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub conversions: Vec<Conversion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values_strictly_increase() {
        for pair in NUMERALS.windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
    }

    #[test]
    fn test_subtractive_amounts() {
        let amounts: Vec<(char, u32)> = NUMERALS
            .iter()
            .filter_map(|n| n.partner().map(|p| (n.symbol, n.value - p.value)))
            .collect();
        assert_eq!(
            amounts,
            vec![
                ('V', 4),
                ('X', 9),
                ('L', 40),
                ('C', 90),
                ('D', 400),
                ('M', 900)
            ]
        );
    }

    #[test]
    fn test_partner_precedes_entry() {
        for (index, numeral) in NUMERALS.iter().enumerate() {
            if let Some(partner) = numeral.subtractive {
                assert!(partner < index);
            }
        }
    }

    #[test]
    fn test_numeral_index_is_case_sensitive() {
        assert_eq!(numeral_index('M'), Some(6));
        assert_eq!(numeral_index('I'), Some(0));
        assert_eq!(numeral_index('m'), None);
        assert_eq!(numeral_index('Ⅻ'), None);
    }

    #[test]
    fn test_auto_direction() {
        assert_eq!(Direction::Auto.resolve("2489"), Direction::Encode);
        assert_eq!(Direction::Auto.resolve("-5"), Direction::Encode);
        assert_eq!(Direction::Auto.resolve("+7"), Direction::Encode);
        assert_eq!(Direction::Auto.resolve("MMM"), Direction::Decode);
        assert_eq!(Direction::Auto.resolve("-"), Direction::Decode);
        assert_eq!(Direction::Auto.resolve(""), Direction::Decode);
        assert_eq!(Direction::Encode.resolve("MMM"), Direction::Encode);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("decode".parse::<Direction>(), Ok(Direction::Decode));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
