//! Hashing utilities for the composite-signature scheme.
//!
//! This module provides keccak-256 based hashing functions for:
//! - Encoded message payloads (leaf digests)
//! - Pairs of digests (Merkle tree nodes)
//!
//! Pair hashing is canonical: the lexicographically smaller digest is always
//! hashed first, so a parent never depends on which side a child sat on.
//! The on-chain verifier reproduces it as `keccak256(abi.encodePacked(min, max))`.

use alloy::primitives::keccak256;

/// Type alias for a 32-byte hash value.
/// Used throughout the crate for leaf digests, tree nodes and roots.
pub type Hash32 = [u8; 32];

/// A constant representing a hash of all zeros.
/// Used as the padding leaf when the message count is not a power of two.
pub const ZERO_HASH32: Hash32 = [0u8; 32];

/// Computes the keccak-256 hash of a single value.
///
/// # Arguments
/// * `a` - Value to hash (typically an encoded typed-data message)
///
/// # Returns
/// The 32-byte hash of the input
pub fn hash<T: AsRef<[u8]>>(a: T) -> Hash32 {
    keccak256(a.as_ref()).0
}

/// Computes the keccak-256 hash of two digests in canonical order.
///
/// The smaller digest (byte-wise comparison) is concatenated before the
/// larger one, then the 64-byte buffer is hashed. Swapping the arguments
/// never changes the result.
///
/// # Arguments
/// * `a` - First child digest
/// * `b` - Second child digest
///
/// # Returns
/// The 32-byte parent digest
pub fn hash_pair(a: &Hash32, b: &Hash32) -> Hash32 {
    let mut buf = [0u8; 64];
    if a <= b {
        buf[..32].copy_from_slice(a);
        buf[32..].copy_from_slice(b);
    } else {
        buf[..32].copy_from_slice(b);
        buf[32..].copy_from_slice(a);
    }
    keccak256(buf).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_keccak256() {
        // keccak-256 of the empty string, the usual sanity vector
        let expected =
            hex::decode("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
                .unwrap();
        assert_eq!(hash([]).to_vec(), expected);
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = hash(b"a");
        let b = hash(b"b");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_eq!(hash_pair(&a, &a), hash_pair(&a, &a));
    }

    #[test]
    fn test_hash_pair_sorts_before_hashing() {
        let a = hash(b"a");
        let b = hash(b"b");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&lo);
        buf[32..].copy_from_slice(&hi);
        assert_eq!(hash_pair(&a, &b), hash(buf));
    }
}
