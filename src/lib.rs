//! Checksummed address encodings in two alphabets.
//!
//! This crate renders 20-byte hash digests as human-copyable,
//! typo-resistant address strings and converts between two versioned,
//! checksummed encodings:
//!
//! - **c32**: a 32-symbol Crockford-style alphabet used for Stacks-style
//!   addresses. Case-insensitive on decode, with the homoglyphs `O`/`o`
//!   and `I`/`i`/`L`/`l` folded onto `0` and `1`.
//! - **b58**: the classic 58-symbol Bitcoin-style alphabet,
//!   case-sensitive.
//!
//! Both check encodings wrap `version ‖ payload` with the first four
//! bytes of a double SHA-256 digest, so transcription errors are caught
//! at decode time.
//!
//! All operations are pure, synchronous functions over immutable inputs:
//! no I/O, no shared state, safe to call from any number of threads.
//!
//! # Examples
//!
//! ```
//! use c32check::{b58_to_c32, c32_address, c32_address_decode};
//!
//! let addr = c32_address(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d")?;
//! assert_eq!(addr, "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
//!
//! let (version, hash160) = c32_address_decode(&addr)?;
//! assert_eq!(version, 22);
//!
//! // Bitcoin-style addresses convert through the version table.
//! let converted = b58_to_c32("16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg", None)?;
//! assert_eq!(converted, "SPWNYDJ3STG7XH7ERWXMV6MQ7Q6EATWVY5Q1QMP8");
//! # Ok::<(), c32check::CodecError>(())
//! ```

mod address;
mod alphabet;
mod b58;
mod c32;
mod check;
mod convert;
mod error;
mod hashing;
mod radix;

pub use address::{c32_address, c32_address_decode, StacksAddress, C32_ADDRESS_PREFIX};
pub use alphabet::{B58_ALPHABET, C32_ALPHABET};
pub use b58::{b58_decode, b58_encode};
pub use c32::{c32_decode, c32_encode, c32_normalize};
pub use check::{b58_check_decode, b58_check_encode, c32_check_decode, c32_check_encode};
pub use convert::{
    b58_to_c32, b58_version_to_c32, c32_to_b58, c32_version_to_b58, AddressVersion,
    ADDRESS_VERSIONS,
};
pub use error::CodecError;
pub use hashing::{checksum, compute_hash256, Hash256, CHECKSUM_LEN};

/// Length of an address payload in bytes (a hash160 digest).
pub const HASH160_LEN: usize = 20;

/// Largest version representable as a single c32 symbol.
pub const C32_MAX_VERSION: u8 = 31;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_roundtrip() {
        let hex = "0000de4db33f0000de4db33f0000de4db33f0000";
        let addr = c32_address(26, hex).unwrap();
        let (version, decoded) = c32_address_decode(&addr).unwrap();
        assert_eq!((version, decoded.as_str()), (26, hex));

        let b58 = c32_to_b58(&addr, None).unwrap();
        assert_eq!(b58_to_c32(&b58, None).unwrap(), addr);
    }

    #[test]
    fn test_plain_and_check_agree_on_payload() {
        let hex = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
        let plain = c32_encode(hex, None).unwrap();
        let checked = c32_check_encode(0, hex).unwrap();
        // The check encoding embeds a checksum, so it is strictly longer.
        assert!(checked.len() > plain.len());
        assert_eq!(c32_decode(&plain, None).unwrap(), hex);
    }
}
