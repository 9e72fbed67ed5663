use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("Hex string must have an even number of characters (got {len})")]
    OddLength { len: usize },
    #[error("Invalid hex digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },
}

/// Parse a hexadecimal string into bytes, high nibble first.
///
/// Spaces are stripped before validation. The length check runs before any
/// digit is looked at, so `"ZZZ"` reports [`HexError::OddLength`].
/// Positions in [`HexError::InvalidDigit`] count characters after space removal.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<char> = text.chars().filter(|&c| c != ' ').collect();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let nibble = |index: usize| -> Result<u8, HexError> {
        let ch = digits[index];
        ch.to_digit(16)
            .map(|d| d as u8)
            .ok_or(HexError::InvalidDigit { ch, index })
    };

    (0..digits.len())
        .step_by(2)
        .map(|i| -> Result<u8, HexError> { Ok((nibble(i)? << 4) | nibble(i + 1)?) })
        .collect()
}
