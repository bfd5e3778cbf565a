//! Pseudohex, the base-34 digit alphabet used by every encoded statistic.
//!
//! Digits run `0-9` then `A-Z` with `I` and `O` left out, so that a
//! profile like `A788899-D` never mixes up a one with an eye or a zero
//! with an oh.
//!
//! ```
//! use cepheus_core::pseudohex;
//!
//! assert_eq!(pseudohex::encode(18).unwrap(), 'J');
//! assert_eq!(pseudohex::decode('j').unwrap(), 18);
//! ```

use crate::error::CodecError;

/// The 34 digits, indexed by value.
pub const ALPHABET: [char; 34] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Largest value with a digit.
pub const MAX_VALUE: u32 = 33;

/// Converts a value in 0–33 to its digit.
pub fn encode(value: u32) -> Result<char, CodecError> {
    ALPHABET
        .get(value as usize)
        .copied()
        .ok_or(CodecError::OutOfRange(value))
}

/// Converts a digit back to its value. Lowercase letters are accepted.
pub fn decode(symbol: char) -> Result<u8, CodecError> {
    let upper = symbol.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&c| c == upper)
        .map(|i| i as u8)
        .ok_or(CodecError::UnknownSymbol(symbol))
}

/// Encodes a statistic stored as `u8`.
pub(crate) fn digit(value: u8) -> Result<char, CodecError> {
    encode(u32::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_value() {
        for v in 0..=MAX_VALUE {
            let c = encode(v).unwrap();
            assert_eq!(u32::from(decode(c).unwrap()), v);
        }
    }

    #[test]
    fn round_trip_every_symbol_any_case() {
        for &c in &ALPHABET {
            assert_eq!(encode(u32::from(decode(c).unwrap())).unwrap(), c);
            let lower = c.to_ascii_lowercase();
            assert_eq!(encode(u32::from(decode(lower).unwrap())).unwrap(), c);
        }
    }

    #[test]
    fn skips_i_and_o() {
        assert_eq!(encode(17).unwrap(), 'H');
        assert_eq!(encode(18).unwrap(), 'J');
        assert_eq!(encode(22).unwrap(), 'N');
        assert_eq!(encode(23).unwrap(), 'P');
        assert_eq!(decode('I'), Err(CodecError::UnknownSymbol('I')));
        assert_eq!(decode('o'), Err(CodecError::UnknownSymbol('o')));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(encode(34), Err(CodecError::OutOfRange(34)));
        assert_eq!(encode(u32::MAX), Err(CodecError::OutOfRange(u32::MAX)));
    }

    #[test]
    fn unknown_symbols() {
        for c in ['-', ' ', '!', 'é'] {
            assert_eq!(decode(c), Err(CodecError::UnknownSymbol(c)));
        }
    }
}
