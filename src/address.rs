//! Fixed-length c32 address codec and the [`StacksAddress`] value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::check::{c32_check_decode, c32_check_encode};
use crate::error::CodecError;
use crate::radix::hex_to_bytes;
use crate::{C32_MAX_VERSION, HASH160_LEN};

/// The literal prefix symbol every c32 address starts with.
pub const C32_ADDRESS_PREFIX: char = 'S';

/// Encodes a 20-byte hash160 hex payload as a c32 address.
///
/// The output is the `S` prefix, one version symbol, and the
/// check-encoded payload.
///
/// # Errors
///
/// Returns `InvalidHex` for non-hex payloads, `InvalidPayloadLength` if
/// the payload is not exactly 20 bytes, and `InvalidVersion` if
/// `version > 31`.
///
/// # Examples
///
/// ```
/// use c32check::{c32_address, c32_address_decode};
///
/// let addr = c32_address(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d")?;
/// assert_eq!(addr, "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
///
/// let (version, hex) = c32_address_decode(&addr)?;
/// assert_eq!(version, 22);
/// assert_eq!(hex, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
/// # Ok::<(), c32check::CodecError>(())
/// ```
pub fn c32_address(version: u8, hex: &str) -> Result<String, CodecError> {
    let payload = hex_to_bytes(hex)?;
    if payload.len() != HASH160_LEN {
        return Err(CodecError::InvalidPayloadLength {
            expected: HASH160_LEN,
            actual: payload.len(),
        });
    }
    let encoded = c32_check_encode(version, hex)?;
    Ok(format!("{C32_ADDRESS_PREFIX}{encoded}"))
}

/// Decodes a c32 address to `(version, hash160_hex)`.
///
/// # Errors
///
/// Returns `MissingPrefix` if the `S` prefix is absent,
/// `InvalidPayloadLength` if the recovered payload is not exactly
/// 20 bytes, and any error of [`c32_check_decode`] otherwise.
pub fn c32_address_decode(address: &str) -> Result<(u8, String), CodecError> {
    let rest = address
        .strip_prefix(C32_ADDRESS_PREFIX)
        .ok_or(CodecError::MissingPrefix {
            expected: C32_ADDRESS_PREFIX,
        })?;
    let (version, payload_hex) = c32_check_decode(rest)?;
    if payload_hex.len() != HASH160_LEN * 2 {
        return Err(CodecError::InvalidPayloadLength {
            expected: HASH160_LEN,
            actual: payload_hex.len() / 2,
        });
    }
    Ok((version, payload_hex))
}

/// A versioned 20-byte address.
///
/// Holds the address version and the hash160 payload as raw bytes.
///
/// # String Representation
///
/// Addresses display as c32 address strings: the `S` prefix, one version
/// symbol, and the check-encoded payload.
///
/// # Examples
///
/// ```
/// use c32check::StacksAddress;
///
/// let addr: StacksAddress = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7".parse().unwrap();
/// assert_eq!(addr.version(), 22);
/// assert_eq!(addr.to_hex(), "a46ff88886c2ef9762d970b4d2c63678835bd39d");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StacksAddress {
    version: u8,
    hash160: [u8; HASH160_LEN],
}

impl StacksAddress {
    /// Creates an address from a version and a 20-byte hash.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` if `version > 31`.
    pub fn new(version: u8, hash160: [u8; HASH160_LEN]) -> Result<Self, CodecError> {
        if version > C32_MAX_VERSION {
            return Err(CodecError::InvalidVersion {
                version,
                max: C32_MAX_VERSION,
            });
        }
        Ok(Self { version, hash160 })
    }

    /// Creates an address from a version and a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPayloadLength` if the slice is not exactly
    /// 20 bytes, or `InvalidVersion` if `version > 31`.
    pub fn from_slice(version: u8, bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != HASH160_LEN {
            return Err(CodecError::InvalidPayloadLength {
                expected: HASH160_LEN,
                actual: bytes.len(),
            });
        }
        let mut hash160 = [0u8; HASH160_LEN];
        hash160.copy_from_slice(bytes);
        Self::new(version, hash160)
    }

    /// Returns the address version.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the hash160 payload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; HASH160_LEN] {
        &self.hash160
    }

    /// Returns the hex-encoded hash160 payload.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash160)
    }
}

impl fmt::Display for StacksAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Version and length are validated at construction.
        match c32_address(self.version, &self.to_hex()) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "<invalid>"),
        }
    }
}

impl fmt::Debug for StacksAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StacksAddress({self})")
    }
}

impl FromStr for StacksAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, payload_hex) = c32_address_decode(s)?;
        let bytes = hex_to_bytes(&payload_hex)?;
        Self::from_slice(version, &bytes)
    }
}

impl Serialize for StacksAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            let mut buf = [0u8; 1 + HASH160_LEN];
            buf[0] = self.version;
            buf[1..].copy_from_slice(&self.hash160);
            serializer.serialize_bytes(&buf)
        }
    }
}

impl<'de> Deserialize<'de> for StacksAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != 1 + HASH160_LEN {
                return Err(serde::de::Error::custom(CodecError::InvalidPayloadLength {
                    expected: HASH160_LEN,
                    actual: bytes.len().saturating_sub(1),
                }));
            }
            Self::from_slice(bytes[0], &bytes[1..]).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH160_HEX: &str = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
    const ADDRESS: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";

    #[test]
    fn test_known_address() {
        assert_eq!(c32_address(22, HASH160_HEX).unwrap(), ADDRESS);
        assert_eq!(
            c32_address_decode(ADDRESS).unwrap(),
            (22, HASH160_HEX.to_string())
        );
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(
            c32_address_decode("P2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            Err(CodecError::MissingPrefix { expected: 'S' })
        );
        assert_eq!(
            c32_address_decode(""),
            Err(CodecError::MissingPrefix { expected: 'S' })
        );
    }

    #[test]
    fn test_payload_length_enforced() {
        assert_eq!(
            c32_address(22, "a46ff8"),
            Err(CodecError::InvalidPayloadLength { expected: 20, actual: 3 })
        );
        // A valid check encoding of a short payload is not a valid address.
        let short = format!(
            "S{}",
            crate::check::c32_check_encode(22, "a46ff8").unwrap()
        );
        assert_eq!(
            c32_address_decode(&short),
            Err(CodecError::InvalidPayloadLength { expected: 20, actual: 3 })
        );
    }

    #[test]
    fn test_version_range() {
        assert!(matches!(
            c32_address(32, HASH160_HEX),
            Err(CodecError::InvalidVersion { version: 32, max: 31 })
        ));
        for version in [0u8, 20, 21, 22, 26, 31] {
            let addr = c32_address(version, HASH160_HEX).unwrap();
            assert_eq!(addr.chars().next(), Some('S'));
            assert_eq!(c32_address_decode(&addr).unwrap().0, version);
        }
    }

    #[test]
    fn test_stacks_address_roundtrip() {
        let addr: StacksAddress = ADDRESS.parse().unwrap();
        assert_eq!(addr.version(), 22);
        assert_eq!(addr.to_hex(), HASH160_HEX);
        assert_eq!(addr.to_string(), ADDRESS);
    }

    #[test]
    fn test_stacks_address_rejects_bad_version() {
        assert!(StacksAddress::new(32, [0u8; HASH160_LEN]).is_err());
    }

    #[test]
    fn test_json_serialization() {
        let addr: StacksAddress = ADDRESS.parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ADDRESS}\""));
        let parsed: StacksAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, parsed);
    }
}
