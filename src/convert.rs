//! Cross-alphabet address conversion and the published version table.

use crate::address::{c32_address, c32_address_decode};
use crate::check::{b58_check_decode, b58_check_encode};
use crate::error::CodecError;
use crate::HASH160_LEN;

/// A well-known address family: its name and its version number in each
/// alphabet's version space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressVersion {
    /// Human-readable family name.
    pub name: &'static str,
    /// Version in the c32 space (one alphabet symbol).
    pub c32: u8,
    /// Version in the b58 space (one byte).
    pub b58: u8,
}

/// The published correspondence table between the two version spaces.
///
/// Read-only configuration data; the converter consults it whenever no
/// explicit target version is given.
pub const ADDRESS_VERSIONS: [AddressVersion; 4] = [
    AddressVersion { name: "mainnet-p2pkh", c32: 22, b58: 0 },
    AddressVersion { name: "mainnet-p2sh", c32: 20, b58: 5 },
    AddressVersion { name: "testnet-p2pkh", c32: 26, b58: 111 },
    AddressVersion { name: "testnet-p2sh", c32: 21, b58: 196 },
];

/// Looks up the b58 equivalent of a c32 address version.
#[must_use]
pub fn c32_version_to_b58(version: u8) -> Option<u8> {
    ADDRESS_VERSIONS
        .iter()
        .find(|v| v.c32 == version)
        .map(|v| v.b58)
}

/// Looks up the c32 equivalent of a b58 address version.
#[must_use]
pub fn b58_version_to_c32(version: u8) -> Option<u8> {
    ADDRESS_VERSIONS
        .iter()
        .find(|v| v.b58 == version)
        .map(|v| v.c32)
}

/// Re-encodes a c32 address as a b58check address.
///
/// With no `target_version`, the source version maps through
/// [`ADDRESS_VERSIONS`]; an unmapped version is an error.
///
/// # Errors
///
/// Any decode error of the source address, or `NoEquivalentVersion` if
/// the version has no table entry and no explicit target was given.
pub fn c32_to_b58(address: &str, target_version: Option<u8>) -> Result<String, CodecError> {
    let (version, payload_hex) = c32_address_decode(address)?;
    let target = match target_version {
        Some(v) => v,
        None => c32_version_to_b58(version)
            .ok_or(CodecError::NoEquivalentVersion { version })?,
    };
    b58_check_encode(target, &payload_hex)
}

/// Re-encodes a b58check address as a c32 address.
///
/// With no `target_version`, the source version maps through
/// [`ADDRESS_VERSIONS`]; an unmapped version is an error.
///
/// # Errors
///
/// Any decode error of the source address, `InvalidPayloadLength` if the
/// wrapped payload is not 20 bytes, or `NoEquivalentVersion` if the
/// version has no table entry and no explicit target was given.
///
/// # Examples
///
/// ```
/// use c32check::{b58_to_c32, c32_to_b58};
///
/// let c32 = b58_to_c32("16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg", None)?;
/// assert_eq!(c32, "SPWNYDJ3STG7XH7ERWXMV6MQ7Q6EATWVY5Q1QMP8");
///
/// let b58 = c32_to_b58(&c32, None)?;
/// assert_eq!(b58, "16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg");
/// # Ok::<(), c32check::CodecError>(())
/// ```
pub fn b58_to_c32(address: &str, target_version: Option<u8>) -> Result<String, CodecError> {
    let (version, payload_hex) = b58_check_decode(address)?;
    if payload_hex.len() != HASH160_LEN * 2 {
        return Err(CodecError::InvalidPayloadLength {
            expected: HASH160_LEN,
            actual: payload_hex.len() / 2,
        });
    }
    let target = match target_version {
        Some(v) => v,
        None => b58_version_to_c32(version)
            .ok_or(CodecError::NoEquivalentVersion { version })?,
    };
    c32_address(target, &payload_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    const B58_ADDRESS: &str = "16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg";
    const C32_ADDRESS: &str = "SPWNYDJ3STG7XH7ERWXMV6MQ7Q6EATWVY5Q1QMP8";

    #[test]
    fn test_table_is_bijective() {
        for entry in &ADDRESS_VERSIONS {
            assert_eq!(c32_version_to_b58(entry.c32), Some(entry.b58));
            assert_eq!(b58_version_to_c32(entry.b58), Some(entry.c32));
        }
    }

    #[test]
    fn test_known_conversion() {
        assert_eq!(b58_to_c32(B58_ADDRESS, None).unwrap(), C32_ADDRESS);
        assert_eq!(c32_to_b58(C32_ADDRESS, None).unwrap(), B58_ADDRESS);
    }

    #[test]
    fn test_roundtrip_all_table_versions() {
        let hex = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
        for entry in &ADDRESS_VERSIONS {
            let c32 = c32_address(entry.c32, hex).unwrap();
            let b58 = c32_to_b58(&c32, None).unwrap();
            assert_eq!(b58_to_c32(&b58, None).unwrap(), c32, "{}", entry.name);
        }
    }

    #[test]
    fn test_explicit_target_version() {
        let hex = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
        let c32 = c32_address(31, hex).unwrap();
        // Version 31 has no table entry, but an explicit target works.
        let b58 = c32_to_b58(&c32, Some(42)).unwrap();
        let (version, payload) = b58_check_decode(&b58).unwrap();
        assert_eq!(version, 42);
        assert_eq!(payload, hex);
    }

    #[test]
    fn test_unmapped_version_fails() {
        let hex = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
        let c32 = c32_address(31, hex).unwrap();
        assert_eq!(
            c32_to_b58(&c32, None),
            Err(CodecError::NoEquivalentVersion { version: 31 })
        );

        let b58 = b58_check_encode(42, hex).unwrap();
        assert_eq!(
            b58_to_c32(&b58, None),
            Err(CodecError::NoEquivalentVersion { version: 42 })
        );
    }
}
