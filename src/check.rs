//! Checksum-wrapped ("check") codecs for both alphabets.
//!
//! A check encoding wraps `version ‖ payload ‖ checksum(version ‖ payload)`
//! in an alphabet. The two alphabets place the version differently: c32
//! versions fit exactly one symbol and are prepended to the rendered
//! string, while b58 versions are a full byte prepended to the buffer
//! before conversion.

use crate::alphabet::C32;
use crate::b58::{b58_decode_bytes, b58_encode_bytes};
use crate::c32::{c32_decode_bytes, c32_encode_bytes, c32_normalize};
use crate::error::CodecError;
use crate::hashing::{checksum, CHECKSUM_LEN};
use crate::radix::hex_to_bytes;
use crate::C32_MAX_VERSION;

/// How a check codec composes the version into the checksummed buffer.
enum VersionScheme {
    /// The version is rendered as a single leading alphabet symbol (c32).
    PrefixSymbol,
    /// The version is a leading byte of the converted buffer (b58).
    LeadingByte,
}

/// Checksum over `version_byte ‖ payload_bytes`.
fn versioned_checksum(version: u8, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    checksum(&data)
}

fn check_encode(scheme: VersionScheme, version: u8, hex: &str) -> Result<String, CodecError> {
    let payload = hex_to_bytes(hex)?;
    let check = versioned_checksum(version, &payload);
    match scheme {
        VersionScheme::PrefixSymbol => {
            let mut buf = payload;
            buf.extend_from_slice(&check);
            let mut out = String::with_capacity(1 + buf.len() * 2);
            out.push(C32.symbol(version));
            out.push_str(&c32_encode_bytes(&buf));
            Ok(out)
        }
        VersionScheme::LeadingByte => {
            let mut buf = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
            buf.push(version);
            buf.extend_from_slice(&payload);
            buf.extend_from_slice(&check);
            Ok(b58_encode_bytes(&buf))
        }
    }
}

/// Encodes a versioned hex payload as a c32check string.
///
/// The version becomes the leading symbol, followed by the payload and a
/// 4-byte checksum over `version ‖ payload` rendered in c32.
///
/// # Errors
///
/// Returns `InvalidVersion` if `version > 31` and `InvalidHex` for
/// non-hex payloads.
///
/// # Examples
///
/// ```
/// use c32check::{c32_check_decode, c32_check_encode};
///
/// let encoded = c32_check_encode(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d")?;
/// assert!(encoded.starts_with('P'));
///
/// let (version, hex) = c32_check_decode(&encoded)?;
/// assert_eq!(version, 22);
/// assert_eq!(hex, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
/// # Ok::<(), c32check::CodecError>(())
/// ```
pub fn c32_check_encode(version: u8, hex: &str) -> Result<String, CodecError> {
    if version > C32_MAX_VERSION {
        return Err(CodecError::InvalidVersion {
            version,
            max: C32_MAX_VERSION,
        });
    }
    check_encode(VersionScheme::PrefixSymbol, version, hex)
}

/// Decodes a c32check string to `(version, payload_hex)`.
///
/// Homoglyphs are normalized before any lookup, so typo-folded input
/// decodes identically to the canonical string.
///
/// # Errors
///
/// - `InvalidSymbol` if any character has no canonical c32 equivalent.
/// - `TooShort` if the buffer after the version symbol decodes to fewer
///   than 4 bytes.
/// - `ChecksumMismatch` if the recomputed checksum disagrees with the
///   embedded one.
pub fn c32_check_decode(input: &str) -> Result<(u8, String), CodecError> {
    let normalized = c32_normalize(input);
    let Some(version_symbol) = normalized.chars().next() else {
        return Err(CodecError::TooShort {
            minimum: CHECKSUM_LEN,
            actual: 0,
        });
    };
    let version = C32.index_of(version_symbol)?;
    let bytes = c32_decode_bytes(&normalized[version_symbol.len_utf8()..])?;
    if bytes.len() < CHECKSUM_LEN {
        return Err(CodecError::TooShort {
            minimum: CHECKSUM_LEN,
            actual: bytes.len(),
        });
    }
    let (payload, embedded) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if embedded != versioned_checksum(version, payload) {
        return Err(CodecError::ChecksumMismatch);
    }
    Ok((version, hex::encode(payload)))
}

/// Encodes a versioned hex payload as a b58check string.
///
/// The version byte is prepended to the buffer, so the whole
/// `version ‖ payload ‖ checksum` unit converts together; a zero version
/// surfaces as a leading `1` symbol.
///
/// # Errors
///
/// Returns `InvalidHex` for non-hex payloads. Any `u8` version is valid.
pub fn b58_check_encode(version: u8, hex: &str) -> Result<String, CodecError> {
    check_encode(VersionScheme::LeadingByte, version, hex)
}

/// Decodes a b58check string to `(version, payload_hex)`.
///
/// # Errors
///
/// - `InvalidSymbol` on characters outside the base-58 alphabet.
/// - `TooShort` if the decoded buffer cannot hold a version byte and a
///   4-byte checksum.
/// - `ChecksumMismatch` if the recomputed checksum disagrees with the
///   embedded one.
pub fn b58_check_decode(input: &str) -> Result<(u8, String), CodecError> {
    let bytes = b58_decode_bytes(input)?;
    if bytes.len() < 1 + CHECKSUM_LEN {
        return Err(CodecError::TooShort {
            minimum: 1 + CHECKSUM_LEN,
            actual: bytes.len(),
        });
    }
    let (data, embedded) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if embedded != checksum(data) {
        return Err(CodecError::ChecksumMismatch);
    }
    Ok((data[0], hex::encode(&data[1..])))
}
