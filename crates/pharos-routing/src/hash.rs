//! The 16-byte hash behind the ring.
//!
//! Ring positions and lookup targets are both derived from a deterministic
//! 128-bit digest. All processes in a deployment must agree on the algorithm,
//! or their rings diverge; MD5 is the default (its cryptographic weaknesses
//! are irrelevant here — only uniform distribution matters).

use std::sync::Arc;

use md5::{Digest, Md5};

use crate::error::RoutingError;

/// A deterministic 128-bit hash over a sequence of byte slices.
///
/// The seam between the continuum and its digest: production uses
/// [`Md5Hasher`], tests inject fixed-output mocks to place ring points
/// precisely.
pub trait RingHasher: std::fmt::Debug + Send + Sync {
    /// Hash the concatenation of `parts` into 16 bytes.
    fn hash16(&self, parts: &[&[u8]]) -> [u8; 16];
}

/// MD5-backed [`RingHasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl RingHasher for Md5Hasher {
    fn hash16(&self, parts: &[&[u8]]) -> [u8; 16] {
        let mut md5 = Md5::new();
        for part in parts {
            md5.update(part);
        }
        md5.finalize().into()
    }
}

/// Look up a hasher by its configured name.
///
/// `"md5"` is the only built-in algorithm; anything else yields
/// [`RoutingError::HashUnavailable`].
pub fn hasher_for(name: &str) -> Result<Arc<dyn RingHasher>, RoutingError> {
    match name {
        "md5" => Ok(Arc::new(Md5Hasher)),
        other => Err(RoutingError::HashUnavailable(other.to_string())),
    }
}

/// Split a 16-byte digest into four little-endian 32-bit ring points.
pub(crate) fn quad(digest: [u8; 16]) -> [u32; 4] {
    let mut points = [0u32; 4];
    for (point, chunk) in points.iter_mut().zip(digest.chunks_exact(4)) {
        *point = u32::from_le_bytes(chunk.try_into().expect("4 bytes"));
    }
    points
}

/// Fold a digest into a single lookup target by XORing its four words.
pub(crate) fn fold(digest: [u8; 16]) -> u32 {
    quad(digest).into_iter().fold(0, |acc, point| acc ^ point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(digest: [u8; 16]) -> String {
        digest.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    #[test]
    fn test_md5_known_vectors() {
        let hasher = Md5Hasher;
        assert_eq!(hex(hasher.hash16(&[b""])), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hex(hasher.hash16(&[b"test"])), "098f6bcd4621d373cade4e832627b4f6");
    }

    #[test]
    fn test_hash16_parts_equal_concatenation() {
        let hasher = Md5Hasher;
        let split = hasher.hash16(&[b"node-a", &7u64.to_le_bytes()]);
        let mut joined = b"node-a".to_vec();
        joined.extend_from_slice(&7u64.to_le_bytes());
        assert_eq!(split, hasher.hash16(&[&joined]));
    }

    #[test]
    fn test_quad_is_little_endian() {
        let digest = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x01, 0x00, 0x00, //
            0x00, 0x00, 0x01, 0x00, //
            0x00, 0x00, 0x00, 0x01,
        ];
        assert_eq!(quad(digest), [1, 0x100, 0x1_0000, 0x100_0000]);
    }

    #[test]
    fn test_fold_xors_words() {
        // md5("test") = 098f6bcd4621d373cade4e832627b4f6; its four LE words
        // are cd6b8f09, 73d32146, 834edeca, f6b42726, and their XOR:
        let digest = Md5Hasher.hash16(&[b"test"]);
        assert_eq!(fold(digest), 0xcb42_57a3);
    }

    #[test]
    fn test_hasher_for_md5() {
        let hasher = hasher_for("md5").unwrap();
        assert_eq!(hex(hasher.hash16(&[b""])), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hasher_for_unknown_algorithm() {
        let err = hasher_for("sha3-512").unwrap_err();
        assert!(matches!(
            err,
            crate::RoutingError::HashUnavailable(ref name) if name == "sha3-512"
        ));
    }
}
