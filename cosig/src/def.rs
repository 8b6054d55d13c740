//! Core definitions and constants for the composite-signature scheme.

/// Length in bytes of a recoverable ECDSA signature (`r || s || v`).
/// Blobs of any other length are rejected before recovery is attempted.
pub const SIGNATURE_LENGTH: usize = 65;

/// Minimum number of digests in a level before pair hashing is fanned out
/// to the rayon thread pool. Below this the per-task overhead dominates.
pub const PARALLEL_HASH_MIN_LEVEL_LEN: usize = 1024;
