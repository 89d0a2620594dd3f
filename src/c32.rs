//! Crockford-style base-32 plain codec.
//!
//! Encodes hex strings into the 32-symbol c32 alphabet and back. Decoding
//! is typo-resistant: input is case-insensitive and the homoglyphs
//! `O`/`o` and `I`/`i`/`L`/`l` are folded onto `0` and `1` before lookup.
//! Leading zero bytes round-trip one-for-one as leading `0` symbols.

use crate::alphabet::C32;
use crate::error::CodecError;
use crate::radix::{bytes_from_digits, digits_from_bytes, hex_to_bytes};

/// Folds homoglyphs onto their canonical c32 symbols.
///
/// Uppercases the input, then maps `O → 0` and `I`/`L → 1`. Characters
/// with no canonical equivalent are left in place and rejected at decode
/// time.
///
/// # Examples
///
/// ```
/// use c32check::c32_normalize;
///
/// assert_eq!(c32_normalize("Ol1iLo"), "011110");
/// ```
#[must_use]
pub fn c32_normalize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'O' => '0',
            'I' | 'L' => '1',
            upper => upper,
        })
        .collect()
}

/// Encodes a byte sequence as c32 at its natural length.
pub(crate) fn c32_encode_bytes(bytes: &[u8]) -> String {
    digits_from_bytes(bytes, C32.radix())
        .into_iter()
        .map(|d| C32.symbol(d))
        .collect()
}

/// Decodes a c32 string (already normalized) to bytes.
pub(crate) fn c32_decode_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let digits = input
        .chars()
        .map(|symbol| C32.index_of(symbol))
        .collect::<Result<Vec<u8>, CodecError>>()?;
    Ok(bytes_from_digits(&digits, C32.radix()))
}

/// Encodes a hex string as a c32 string.
///
/// Odd-length hex is canonicalized with a single leading zero nibble, and
/// hex case is irrelevant. If `min_length` exceeds the natural symbol
/// count, the output is left-padded with `0` symbols; a smaller
/// `min_length` is a no-op (it is a floor, never a truncation).
///
/// # Errors
///
/// Returns `InvalidHex` if the input contains non-hex characters.
///
/// # Examples
///
/// ```
/// use c32check::c32_encode;
///
/// let encoded = c32_encode("a46ff88886c2ef9762d970b4d2c63678835bd39d", None)?;
/// assert_eq!(encoded, "MHQZH246RBQSERPSE2TD5HHPF21NQMWX");
///
/// assert_eq!(c32_encode("", None)?, "");
/// # Ok::<(), c32check::CodecError>(())
/// ```
pub fn c32_encode(hex: &str, min_length: Option<usize>) -> Result<String, CodecError> {
    let bytes = hex_to_bytes(hex)?;
    let encoded = c32_encode_bytes(&bytes);
    let pad = min_length.unwrap_or(0).saturating_sub(encoded.len());
    if pad == 0 {
        return Ok(encoded);
    }
    let mut out = String::with_capacity(pad + encoded.len());
    for _ in 0..pad {
        out.push('0');
    }
    out.push_str(&encoded);
    Ok(out)
}

/// Decodes a c32 string to lowercase hex.
///
/// Homoglyphs are normalized first. The resulting hex always has an even
/// number of nibbles. If `min_byte_len` exceeds the natural byte count,
/// the result is left-padded with zero bytes.
///
/// # Errors
///
/// Returns `InvalidSymbol` if any character has no canonical c32
/// equivalent.
///
/// # Examples
///
/// ```
/// use c32check::c32_decode;
///
/// let hex = c32_decode("MHQZH246RBQSERPSE2TD5HHPF21NQMWX", None)?;
/// assert_eq!(hex, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
/// # Ok::<(), c32check::CodecError>(())
/// ```
pub fn c32_decode(input: &str, min_byte_len: Option<usize>) -> Result<String, CodecError> {
    let normalized = c32_normalize(input);
    let mut bytes = c32_decode_bytes(&normalized)?;
    let pad = min_byte_len.unwrap_or(0).saturating_sub(bytes.len());
    if pad > 0 {
        let mut padded = vec![0u8; pad];
        padded.append(&mut bytes);
        bytes = padded;
    }
    Ok(hex::encode(bytes))
}
