use crate::domain::model::{numeral_index, Numeral, MAX_VALUE, MIN_VALUE, NUMERALS};
use crate::domain::ports::NumeralConverter;
use crate::utils::error::{NumeralError, Result};

/// Symbols allowed in subtractive position. Only these are checked for
/// four-in-a-row repetition.
const SUBTRACTIVE_SYMBOLS: [char; 3] = ['I', 'X', 'C'];
const INVALID_RUN_LEN: usize = 4;

/// Converts `number` to its Roman numeral using subtractive notation.
pub fn encode(number: i64) -> Result<String> {
    let mut remainder = match u32::try_from(number) {
        Ok(n) if (MIN_VALUE..=MAX_VALUE).contains(&n) => n,
        _ => return Err(NumeralError::OutOfRange { value: number }),
    };

    let mut output = String::new();
    for numeral in NUMERALS.iter().rev() {
        remainder = append_numeral(&mut output, remainder, numeral);
        if remainder < 1 {
            break;
        }
    }

    tracing::trace!(number, numeral = %output, "encoded");
    Ok(output)
}

fn append_numeral(output: &mut String, mut remainder: u32, numeral: &Numeral) -> u32 {
    let count = remainder / numeral.value;
    for _ in 0..count {
        output.push(numeral.symbol);
    }
    remainder -= count * numeral.value;

    if let Some(partner) = numeral.partner() {
        let subtractive_value = numeral.value - partner.value;
        if remainder >= subtractive_value {
            output.push(partner.symbol);
            output.push(numeral.symbol);
            remainder -= subtractive_value;
        }
    }

    remainder
}

/// Parses a Roman numeral. Symbols are case-sensitive and the running total
/// is range-checked after every step.
pub fn decode(text: &str) -> Result<u32> {
    if text.is_empty() {
        return Err(NumeralError::EmptyInput);
    }

    let chars: Vec<char> = text.chars().collect();
    let last = chars.len() - 1;
    let mut total: u32 = 0;
    let mut i = 0;

    while i < chars.len() {
        let current = lookup(&chars, i)?;

        if i == last {
            total += NUMERALS[current].value;
            i += 1;
        } else {
            let next = lookup(&chars, i + 1)?;

            if current == next {
                check_subtractive_notation(&chars, i)?;
                total += 2 * NUMERALS[current].value;
                i += 2;
            } else if NUMERALS[next].subtractive == Some(current) {
                total += NUMERALS[next].value - NUMERALS[current].value;
                i += 2;
            } else {
                total += NUMERALS[current].value;
                i += 1;
            }
        }

        if !(MIN_VALUE..=MAX_VALUE).contains(&total) {
            return Err(NumeralError::OutOfRange {
                value: i64::from(total),
            });
        }
    }

    tracing::trace!(numeral = text, value = total, "decoded");
    Ok(total)
}

/// Like [`decode`], but treats `None` as an absent string.
pub fn decode_opt(text: Option<&str>) -> Result<u32> {
    match text {
        Some(text) => decode(text),
        None => Err(NumeralError::NullInput),
    }
}

fn lookup(chars: &[char], index: usize) -> Result<usize> {
    let character = chars[index];
    numeral_index(character).ok_or(NumeralError::InvalidCharacter { character, index })
}

fn check_subtractive_notation(chars: &[char], start: usize) -> Result<()> {
    if chars.len() - start < INVALID_RUN_LEN {
        return Ok(());
    }

    let symbol = chars[start];
    if !SUBTRACTIVE_SYMBOLS.contains(&symbol) {
        return Ok(());
    }

    if chars[start + 1..start + INVALID_RUN_LEN].iter().all(|&c| c == symbol) {
        return Err(NumeralError::InvalidNotation {
            symbol,
            index: start,
        });
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RomanConverter;

impl RomanConverter {
    pub fn new() -> Self {
        Self
    }
}

impl NumeralConverter for RomanConverter {
    fn encode(&self, number: i64) -> Result<String> {
        encode(number)
    }

    fn decode(&self, text: Option<&str>) -> Result<u32> {
        decode_opt(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_subtractive_pairs() {
        assert_eq!(encode(4).unwrap(), "IV");
        assert_eq!(encode(9).unwrap(), "IX");
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(90).unwrap(), "XC");
        assert_eq!(encode(400).unwrap(), "CD");
        assert_eq!(encode(900).unwrap(), "CM");
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");
    }

    #[test]
    fn test_encode_repeats() {
        assert_eq!(encode(3).unwrap(), "III");
        assert_eq!(encode(8).unwrap(), "VIII");
        assert_eq!(encode(49).unwrap(), "XLIX");
        assert_eq!(encode(2888).unwrap(), "MMDCCCLXXXVIII");
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(encode(0), Err(NumeralError::OutOfRange { value: 0 }));
        assert_eq!(encode(-7), Err(NumeralError::OutOfRange { value: -7 }));
        assert_eq!(
            encode(i64::MAX),
            Err(NumeralError::OutOfRange { value: i64::MAX })
        );
    }

    #[test]
    fn test_decode_plain_and_subtractive() {
        assert_eq!(decode("XIV").unwrap(), 14);
        assert_eq!(decode("MCMXCIV").unwrap(), 1994);
        assert_eq!(decode("CDXLIV").unwrap(), 444);
    }

    #[test]
    fn test_decode_reports_offending_char() {
        assert_eq!(
            decode("IVR"),
            Err(NumeralError::InvalidCharacter {
                character: 'R',
                index: 2
            })
        );
        assert_eq!(
            decode("xi"),
            Err(NumeralError::InvalidCharacter {
                character: 'x',
                index: 0
            })
        );
        // a bad lookahead char is reported at its own position
        assert_eq!(
            decode("M X"),
            Err(NumeralError::InvalidCharacter {
                character: ' ',
                index: 1
            })
        );
    }

    #[test]
    fn test_decode_char_index_counts_chars_not_bytes() {
        assert_eq!(
            decode("ⅫI"),
            Err(NumeralError::InvalidCharacter {
                character: 'Ⅻ',
                index: 0
            })
        );
        assert_eq!(
            decode("XÉ"),
            Err(NumeralError::InvalidCharacter {
                character: 'É',
                index: 1
            })
        );
    }

    #[test]
    fn test_four_in_a_row_only_guards_i_x_c() {
        assert_eq!(
            decode("IIII"),
            Err(NumeralError::InvalidNotation {
                symbol: 'I',
                index: 0
            })
        );
        assert_eq!(
            decode("MCCCC"),
            Err(NumeralError::InvalidNotation {
                symbol: 'C',
                index: 1
            })
        );
        // V, L, D and M are not subject to the repetition check
        assert_eq!(decode("VV").unwrap(), 10);
        assert_eq!(decode("LLLL").unwrap(), 200);
        assert_eq!(decode("DDDD").unwrap(), 2000);
    }

    #[test]
    fn test_three_in_a_row_is_allowed() {
        assert_eq!(decode("III").unwrap(), 3);
        assert_eq!(decode("XXXIX").unwrap(), 39);
        assert_eq!(decode("CCCXC").unwrap(), 390);
    }

    #[test]
    fn test_decode_range_checked_while_scanning() {
        assert_eq!(
            decode("MMMII"),
            Err(NumeralError::OutOfRange { value: 3002 })
        );
        // the scan stops at the first step past 3000, before reaching 'Q'
        assert_eq!(
            decode("MMMMQ"),
            Err(NumeralError::OutOfRange { value: 4000 })
        );
    }

    #[test]
    fn test_decode_opt() {
        assert_eq!(decode_opt(None), Err(NumeralError::NullInput));
        assert_eq!(decode_opt(Some("")), Err(NumeralError::EmptyInput));
        assert_eq!(decode_opt(Some("CI")), Ok(101));
    }

    #[test]
    fn test_converter_trait() {
        let converter = RomanConverter::new();
        assert_eq!(converter.encode(2644).unwrap(), "MMDCXLIV");
        assert_eq!(converter.parse("MMDCXLIV").unwrap(), 2644);
        assert_eq!(converter.decode(None), Err(NumeralError::NullInput));
    }
}
