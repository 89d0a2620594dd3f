//! Arbitrary-precision base conversion between byte sequences and digit
//! sequences in an arbitrary radix.
//!
//! Leading zero units are semantically significant on both sides: `N`
//! leading zero bytes become exactly `N` leading zero digits and vice
//! versa, independent of the bit-width mismatch between base 256 and the
//! target radix. The remaining value is converted as one big-endian
//! arbitrary-precision integer via digit-array long division, so inputs of
//! any length convert without fixed-width overflow.

use crate::error::CodecError;

/// Converts a big-endian byte sequence to big-endian digits in `radix`.
///
/// An all-zero input of length `N` yields exactly `N` zero digits; the
/// empty input yields no digits.
pub(crate) fn digits_from_bytes(bytes: &[u8], radix: u32) -> Vec<u8> {
    debug_assert!((2..=256).contains(&radix));
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Little-endian digit accumulator; value = value * 256 + byte.
    let mut digits: Vec<u8> = Vec::new();
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut digits {
            carry += u32::from(*digit) << 8;
            *digit = (carry % radix) as u8;
            carry /= radix;
        }
        while carry > 0 {
            digits.push((carry % radix) as u8);
            carry /= radix;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(digits.iter().rev());
    out
}

/// Converts big-endian digits in `radix` back to a big-endian byte
/// sequence, the inverse of [`digits_from_bytes`].
///
/// Every digit must be below `radix`; the alphabet layer guarantees this.
pub(crate) fn bytes_from_digits(digits: &[u8], radix: u32) -> Vec<u8> {
    debug_assert!((2..=256).contains(&radix));
    debug_assert!(digits.iter().all(|&d| u32::from(d) < radix));
    let zeros = digits.iter().take_while(|&&d| d == 0).count();

    // Little-endian byte accumulator; value = value * radix + digit.
    let mut bytes: Vec<u8> = Vec::new();
    for &digit in &digits[zeros..] {
        let mut carry = u32::from(digit);
        for byte in &mut bytes {
            carry += u32::from(*byte) * radix;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    out
}

/// Parses a hex string into bytes, canonicalizing odd-length input by
/// left-padding a single zero nibble. Case-insensitive.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CodecError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex);
    }
    if hex.len() % 2 == 1 {
        hex::decode(format!("0{hex}")).map_err(|_| CodecError::InvalidHex)
    } else {
        hex::decode(hex).map_err(|_| CodecError::InvalidHex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(digits_from_bytes(&[], 32).is_empty());
        assert!(bytes_from_digits(&[], 32).is_empty());
    }

    #[test]
    fn test_single_value() {
        // 0x22 = 34 = 1 * 32 + 2
        assert_eq!(digits_from_bytes(&[0x22], 32), vec![1, 2]);
        assert_eq!(bytes_from_digits(&[1, 2], 32), vec![0x22]);
    }

    #[test]
    fn test_leading_zeros_preserved_one_for_one() {
        assert_eq!(digits_from_bytes(&[0, 0, 1], 32), vec![0, 0, 1]);
        assert_eq!(bytes_from_digits(&[0, 0, 1], 32), vec![0, 0, 1]);
    }

    #[test]
    fn test_all_zero_input_keeps_length() {
        // N zero bytes map to N zero digits, never a collapsed single zero.
        assert_eq!(digits_from_bytes(&[0; 20], 32), vec![0; 20]);
        assert_eq!(bytes_from_digits(&[0; 20], 58), vec![0; 20]);
    }

    #[test]
    fn test_roundtrip_various_radices() {
        let inputs: &[&[u8]] = &[
            &[0xff],
            &[0x01, 0x00],
            &[0x00, 0xde, 0xad, 0xbe, 0xef],
            &[0xa4, 0x6f, 0xf8, 0x88, 0x86, 0xc2, 0xef, 0x97],
        ];
        for &radix in &[2u32, 16, 32, 58, 255] {
            for bytes in inputs {
                let digits = digits_from_bytes(bytes, radix);
                assert_eq!(
                    bytes_from_digits(&digits, radix).as_slice(),
                    *bytes,
                    "roundtrip failed for {bytes:?} in radix {radix}"
                );
            }
        }
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        // Odd length gets one leading zero nibble.
        assert_eq!(hex_to_bytes("abc").unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("DeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("zz"), Err(CodecError::InvalidHex));
    }
}
