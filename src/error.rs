//! Error types shared by the codec family.

use thiserror::Error;

/// Errors that can occur during encoding or decoding.
///
/// All errors are detected synchronously and returned immediately; no
/// operation returns a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The payload input contains characters outside `[0-9a-fA-F]`.
    #[error("invalid hex string")]
    InvalidHex,

    /// A character is outside the alphabet's canonical set, even after
    /// homoglyph normalization where the alphabet supports it.
    #[error("invalid symbol {symbol:?} for this alphabet")]
    InvalidSymbol { symbol: char },

    /// The version is outside the range the alphabet can represent.
    #[error("invalid version {version}: must be at most {max}")]
    InvalidVersion { version: u8, max: u8 },

    /// An address payload is not exactly the hash160 length.
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    /// An address string lacks its required prefix symbol.
    #[error("missing address prefix {expected:?}")]
    MissingPrefix { expected: char },

    /// The recomputed checksum disagrees with the embedded checksum.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// The decoded buffer is too short to contain a version and checksum.
    #[error("decoded data too short: expected at least {minimum} bytes, got {actual}")]
    TooShort { minimum: usize, actual: usize },

    /// Cross-alphabet conversion was requested without an explicit target
    /// version and the source version has no table equivalent.
    #[error("no equivalent version for {version}")]
    NoEquivalentVersion { version: u8 },
}
