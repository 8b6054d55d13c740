//! Utility functions for the composite-signature scheme.
//!
//! Currently this only hosts the hashing helpers shared by tree
//! construction, proof derivation and proof verification.

pub mod hasher;
