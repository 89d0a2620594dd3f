//! Bitcoin-style base-58 plain codec.
//!
//! Same shape as the c32 codec, but case-sensitive and without a
//! homoglyph layer. Leading zero bytes round-trip one-for-one as leading
//! `1` symbols, the alphabet's zero digit.

use crate::alphabet::B58;
use crate::error::CodecError;
use crate::radix::{bytes_from_digits, digits_from_bytes, hex_to_bytes};

/// Encodes a byte sequence as base-58 at its natural length.
pub(crate) fn b58_encode_bytes(bytes: &[u8]) -> String {
    digits_from_bytes(bytes, B58.radix())
        .into_iter()
        .map(|d| B58.symbol(d))
        .collect()
}

/// Decodes a base-58 string to bytes.
pub(crate) fn b58_decode_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let digits = input
        .chars()
        .map(|symbol| B58.index_of(symbol))
        .collect::<Result<Vec<u8>, CodecError>>()?;
    Ok(bytes_from_digits(&digits, B58.radix()))
}

/// Encodes a hex string as a base-58 string.
///
/// Odd-length hex is canonicalized with a single leading zero nibble. If
/// `min_length` exceeds the natural symbol count, the output is
/// left-padded with `1` symbols; a smaller `min_length` is a no-op.
///
/// # Errors
///
/// Returns `InvalidHex` if the input contains non-hex characters.
pub fn b58_encode(hex: &str, min_length: Option<usize>) -> Result<String, CodecError> {
    let bytes = hex_to_bytes(hex)?;
    let encoded = b58_encode_bytes(&bytes);
    let pad = min_length.unwrap_or(0).saturating_sub(encoded.len());
    if pad == 0 {
        return Ok(encoded);
    }
    let mut out = String::with_capacity(pad + encoded.len());
    for _ in 0..pad {
        out.push('1');
    }
    out.push_str(&encoded);
    Ok(out)
}

/// Decodes a base-58 string to lowercase hex.
///
/// If `min_byte_len` exceeds the natural byte count, the result is
/// left-padded with zero bytes.
///
/// # Errors
///
/// Returns `InvalidSymbol` on any character outside the 58-symbol set.
pub fn b58_decode(input: &str, min_byte_len: Option<usize>) -> Result<String, CodecError> {
    let mut bytes = b58_decode_bytes(input)?;
    let pad = min_byte_len.unwrap_or(0).saturating_sub(bytes.len());
    if pad > 0 {
        let mut padded = vec![0u8; pad];
        padded.append(&mut bytes);
        bytes = padded;
    }
    Ok(hex::encode(bytes))
}
