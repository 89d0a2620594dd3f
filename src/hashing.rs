//! SHA-256 helpers and the 4-byte transcription checksum.

use sha2::{Digest, Sha256};

/// Length of the embedded checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// A 256-bit (32-byte) hash value.
pub type Hash256 = [u8; 32];

/// Computes a SHA-256 hash of the input bytes.
///
/// # Examples
///
/// ```
/// use c32check::compute_hash256;
///
/// let hash = compute_hash256(b"hello world");
/// assert_eq!(hash.len(), 32);
/// ```
#[must_use]
pub fn compute_hash256(data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes the 4-byte checksum of the input: the first four bytes of
/// SHA-256 applied twice.
///
/// Deterministic and keyless; this detects transcription errors, it is not
/// a MAC.
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = compute_hash256(data);
    let second = compute_hash256(&first);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}
