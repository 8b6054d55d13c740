//! Composite signatures over Merkle commitments.
//!
//! `cosig` commits an ordered set of typed-data messages into a single
//! Merkle root, signs that root once, and lets each message be verified on
//! its own with an inclusion proof. One signing ceremony covers the whole
//! set; a counterparty holding one message, its proof, the root and the
//! signature can check it without ever seeing the other messages.
//!
//! # Overview
//! - [`Tree`]: balanced commitment tree with deterministic zero padding and
//!   canonical sort-before-hash pairing
//! - [`Proof`] / [`check_proof`]: stateless per-leaf verification, a pure
//!   fold that needs nothing but the leaf, the siblings and the root
//! - [`sign_messages`] / [`verify_message`]: orchestration over an opaque
//!   signing capability (any [`alloy::signers::SignerSync`]) and ECDSA
//!   recovery
//!
//! The hash is keccak-256 and sibling pairs are concatenated raw, smaller
//! digest first, so an EVM contract reproduces verification as
//! `keccak256(abi.encodePacked(min, max))` per level.
//!
//! # Example
//! ```no_run
//! use alloy::signers::local::PrivateKeySigner;
//! use cosig::{sign_messages, verify_message};
//!
//! let signer = PrivateKeySigner::random();
//! let messages = [b"encoded message one".as_slice(), b"encoded message two"];
//! let cs = sign_messages(&signer, &messages).unwrap();
//!
//! let outcome = verify_message(
//!     messages[0],
//!     cs.proof(0).unwrap(),
//!     &cs.merkle_root(),
//!     &cs.signature_bytes(),
//!     signer.address(),
//! )
//! .unwrap();
//! assert!(outcome.is_valid());
//! ```
//!
//! # Scope
//! Typed-data encoding is the caller's concern: messages arrive here as
//! opaque encoded bytes. Replay protection and policy over which message
//! combinations are acceptable are layered above this crate.

pub mod composite;
pub mod def;
pub mod error;
pub mod merkletree;
pub mod utils;

pub use composite::{sign_messages, verify_message, CompositeSignature, Verification};
pub use error::CosigError;
pub use merkletree::{check_proof, compute_root, Proof, Tree};
pub use utils::hasher::{Hash32, ZERO_HASH32};
