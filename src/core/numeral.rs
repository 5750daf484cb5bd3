use crate::core::converter::{decode, encode};
use crate::domain::model::{MAX_VALUE, MIN_VALUE};
use crate::utils::error::{NumeralError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An integer known to be representable as a Roman numeral (1..=3000).
///
/// Displays as its canonical numeral and parses from one:
///
/// ```
/// use roman_numerals::RomanNumeral;
///
/// let year: RomanNumeral = "MMXXIV".parse().unwrap();
/// assert_eq!(year.value(), 2024);
/// assert_eq!(RomanNumeral::new(49).unwrap().to_string(), "XLIX");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    pub const MIN: RomanNumeral = RomanNumeral(MIN_VALUE as u16);
    pub const MAX: RomanNumeral = RomanNumeral(MAX_VALUE as u16);

    pub fn new(value: i64) -> Result<Self> {
        match u16::try_from(value) {
            Ok(n) if (MIN_VALUE..=MAX_VALUE).contains(&u32::from(n)) => Ok(Self(n)),
            _ => Err(NumeralError::OutOfRange { value }),
        }
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    pub fn to_numeral(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = encode(i64::from(self.0)).map_err(|_| fmt::Error)?;
        f.write_str(&numeral)
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        let value = decode(s)?;
        Self::new(i64::from(value))
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RomanNumeral> for u32 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.value()
    }
}

impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_range() {
        assert_eq!(RomanNumeral::new(1).unwrap(), RomanNumeral::MIN);
        assert_eq!(RomanNumeral::new(3000).unwrap(), RomanNumeral::MAX);
        assert_eq!(
            RomanNumeral::new(3001),
            Err(NumeralError::OutOfRange { value: 3001 })
        );
        assert_eq!(
            RomanNumeral::try_from(-1),
            Err(NumeralError::OutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_display_and_parse() {
        let numeral = RomanNumeral::new(2489).unwrap();
        assert_eq!(numeral.to_string(), "MMCDLXXXIX");
        assert_eq!("MMCDLXXXIX".parse::<RomanNumeral>().unwrap(), numeral);
        assert_eq!(u32::from(numeral), 2489);
        assert!("IIII".parse::<RomanNumeral>().is_err());
    }

    #[test]
    fn test_ordering_follows_value() {
        let four: RomanNumeral = "IV".parse().unwrap();
        let six: RomanNumeral = "VI".parse().unwrap();
        assert!(four < six);
    }

    #[test]
    fn test_serde_uses_numeral_text() {
        let numeral = RomanNumeral::new(101).unwrap();
        let json = serde_json::to_string(&numeral).unwrap();
        assert_eq!(json, "\"CI\"");

        let back: RomanNumeral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, numeral);

        let err = serde_json::from_str::<RomanNumeral>("\"abc\"").unwrap_err();
        assert!(err.to_string().contains("invalid char 'a'"));
    }
}
