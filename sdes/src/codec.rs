//! Fixed 6-bit character codec ("B6")
//!
//! Every processable character maps to a 6-bit group via a fixed 64-symbol
//! alphabet: digits, lowercase, uppercase, space, newline, in that order.
//! Characters outside the alphabet are never encrypted; they are stripped
//! with their positions remembered and spliced back into the output.

use crate::bits::BitString;
use crate::error::{Result, SdesError};

/// The 64-symbol alphabet in index order.
pub const B6_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ \n";

/// Bits per encoded symbol.
pub const SYMBOL_BITS: usize = 6;

/// True if `symbol` is part of the alphabet.
pub fn in_alphabet(symbol: char) -> bool {
    B6_ALPHABET.contains(symbol)
}

/// Encode one alphabet symbol as its 6-bit index.
pub fn encode_symbol(symbol: char) -> Result<BitString> {
    let index = B6_ALPHABET
        .chars()
        .position(|c| c == symbol)
        .ok_or_else(|| {
            SdesError::InvalidParameterValue(format!(
                "character {:?} is not in the B6 alphabet",
                symbol
            ))
        })?;
    BitString::from_decimal_width(index as u64, SYMBOL_BITS)
}

/// Decode a group of at most 6 bits back to its alphabet symbol.
pub fn decode_symbol(bits: &BitString) -> Result<char> {
    if bits.is_empty() || bits.len() > SYMBOL_BITS {
        return Err(SdesError::InvalidBinaryInput(format!(
            "a symbol group must be 1 to {} bits, got {}",
            SYMBOL_BITS,
            bits.len()
        )));
    }
    let index = bits.to_decimal()? as usize;
    B6_ALPHABET.chars().nth(index).ok_or_else(|| {
        SdesError::InvalidBinaryInput(format!("no alphabet symbol at index {}", index))
    })
}

/// Encode a string of alphabet symbols into one bit stream.
pub fn encode_text(text: &str) -> Result<BitString> {
    let mut stream = BitString::new();
    for symbol in text.chars() {
        stream.extend(&encode_symbol(symbol)?);
    }
    Ok(stream)
}

/// Decode a bit stream 6 bits at a time. A final shorter group decodes from
/// its remaining bits.
pub fn decode_text(stream: &BitString) -> Result<String> {
    let mut text = String::new();
    for group in stream.chunks(SYMBOL_BITS) {
        text.push(decode_symbol(&group)?);
    }
    Ok(text)
}

/// Split `text` into its alphabet symbols and the foreign characters, the
/// latter paired with their original character positions.
pub fn strip_foreign(text: &str) -> (String, Vec<(usize, char)>) {
    let mut kept = String::new();
    let mut foreign = Vec::new();
    for (position, symbol) in text.chars().enumerate() {
        if in_alphabet(symbol) {
            kept.push(symbol);
        } else {
            foreign.push((position, symbol));
        }
    }
    (kept, foreign)
}

/// Splice foreign characters back at their recorded positions. Positions
/// must be in ascending order, as produced by [`strip_foreign`]; positions
/// beyond the end append.
pub fn restore_foreign(text: &str, foreign: &[(usize, char)]) -> String {
    let mut symbols: Vec<char> = text.chars().collect();
    for &(position, symbol) in foreign {
        let at = position.min(symbols.len());
        symbols.insert(at, symbol);
    }
    symbols.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(B6_ALPHABET.chars().count(), 64);
        let mut symbols: Vec<char> = B6_ALPHABET.chars().collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 64);
    }

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(encode_symbol('0').unwrap(), bs("000000"));
        assert_eq!(encode_symbol('h').unwrap(), bs("010001"));
        assert_eq!(encode_symbol('\n').unwrap(), bs("111111"));
        for symbol in B6_ALPHABET.chars() {
            let encoded = encode_symbol(symbol).unwrap();
            assert_eq!(decode_symbol(&encoded).unwrap(), symbol);
        }
    }

    #[test]
    fn test_encode_rejects_foreign_symbol() {
        assert!(matches!(
            encode_symbol('!'),
            Err(SdesError::InvalidParameterValue(_))
        ));
    }

    #[test]
    fn test_decode_group_limits() {
        // Short groups decode from their remaining bits
        assert_eq!(decode_symbol(&bs("0100")).unwrap(), '4');
        assert!(matches!(
            decode_symbol(&bs("0000000")),
            Err(SdesError::InvalidBinaryInput(_))
        ));
        assert!(matches!(
            decode_symbol(&BitString::new()),
            Err(SdesError::InvalidBinaryInput(_))
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let stream = encode_text("hello world").unwrap();
        assert_eq!(stream.len(), 11 * SYMBOL_BITS);
        assert_eq!(decode_text(&stream).unwrap(), "hello world");
        assert_eq!(decode_text(&BitString::new()).unwrap(), "");
    }

    #[test]
    fn test_strip_and_restore() {
        let (kept, foreign) = strip_foreign("hello, world!");
        assert_eq!(kept, "hello world");
        assert_eq!(foreign, vec![(5, ','), (12, '!')]);
        assert_eq!(restore_foreign(&kept, &foreign), "hello, world!");
    }

    #[test]
    fn test_restore_appends_positions_past_the_end() {
        // Restoring into a longer or shorter text keeps relative placement
        assert_eq!(restore_foreign("ab", &[(5, '!')]), "ab!");
        assert_eq!(restore_foreign("", &[(0, '?'), (1, '!')]), "?!");
    }

    #[test]
    fn test_strip_all_foreign() {
        let (kept, foreign) = strip_foreign("§§");
        assert_eq!(kept, "");
        assert_eq!(foreign.len(), 2);
        assert_eq!(restore_foreign("", &foreign), "§§");
    }
}
