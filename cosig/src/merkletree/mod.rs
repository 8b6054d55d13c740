//! Merkle commitment tree for composite signatures.
//!
//! This module implements the balanced, zero-padded Merkle tree that a set
//! of message digests is committed into, and the inclusion proofs derived
//! from it. It includes:
//!
//! - [`Tree`]: the full level structure built once per signing operation
//! - [`Proof`]: ordered sibling digests for one leaf
//! - [`check_proof`] / [`compute_root`]: stateless root recomputation from a
//!   leaf and a proof, usable without the tree that produced them
//!
//! Parent digests use the canonical sort-before-hash rule from
//! [`hasher::hash_pair`](crate::utils::hasher::hash_pair), so proofs carry
//! no left/right direction bits.

pub mod proof;
pub mod tree;

pub use proof::{check_proof, compute_root, Proof};
pub use tree::Tree;
