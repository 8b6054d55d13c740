//! Inclusion proofs and stateless root recomputation.
//!
//! A [`Proof`] is the ordered list of sibling digests for one leaf, bottom
//! to top. Verification is a pure fold over it: at each step the running
//! digest and the sibling are re-hashed with the canonical sort-before-hash
//! rule, so no branch directions are stored and nothing from the original
//! tree is needed.

use serde::{Deserialize, Serialize};

use crate::utils::hasher::{self, Hash32};

/// Ordered sibling digests for one leaf, from the leaf's level up to just
/// below the root. Empty for a single-leaf tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    siblings: Vec<Hash32>,
}

impl Proof {
    pub(crate) fn new(siblings: Vec<Hash32>) -> Self {
        Self { siblings }
    }

    /// The sibling digests, bottom to top.
    pub fn siblings(&self) -> &[Hash32] {
        &self.siblings
    }

    /// Number of siblings, equal to the height of the tree that produced
    /// this proof.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}

/// Recomputes the root committed to by `leaf` and `proof`.
///
/// Folds the sort-before-hash rule over the siblings. With an empty proof
/// the result is `leaf` itself, which is exactly the single-message case.
///
/// Exposed separately from [`check_proof`] so callers can log the
/// mismatching root when diagnosing a failed verification.
pub fn compute_root(leaf: &Hash32, proof: &Proof) -> Hash32 {
    proof
        .siblings
        .iter()
        .fold(*leaf, |running, sibling| hasher::hash_pair(&running, sibling))
}

/// Checks that `leaf` is committed under `root` by `proof`.
///
/// A `false` result is a normal negative outcome, not an error: either the
/// leaf was never part of the commitment or the proof was tampered with.
pub fn check_proof(leaf: &Hash32, proof: &Proof, root: &Hash32) -> bool {
    compute_root(leaf, proof) == *root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merkletree::tree::Tree;

    fn leaves(n: usize) -> Vec<Hash32> {
        (0..n).map(|i| hasher::hash([i as u8, 0xa5])).collect()
    }

    #[test]
    fn test_round_trip_all_indices() {
        for n in 1..=9 {
            let ls = leaves(n);
            let tree = Tree::build(&ls).unwrap();
            let root = tree.root();
            for (i, leaf) in ls.iter().enumerate() {
                let proof = tree.proof(i).unwrap();
                assert_eq!(proof.len(), tree.height());
                assert!(check_proof(leaf, &proof, &root), "n={} i={}", n, i);
            }
        }
    }

    #[test]
    fn test_empty_proof_holds_iff_leaf_equals_root() {
        let leaf = hasher::hash(b"lonely");
        let proof = Proof::default();
        assert!(check_proof(&leaf, &proof, &leaf));
        assert!(!check_proof(&leaf, &proof, &hasher::hash(b"other")));
    }

    #[test]
    fn test_bit_flip_in_any_sibling_fails() {
        let ls = leaves(8);
        let tree = Tree::build(&ls).unwrap();
        let root = tree.root();
        let proof = tree.proof(3).unwrap();
        for pos in 0..proof.len() {
            for (byte, bit) in [(0usize, 0u8), (31, 7)] {
                let mut siblings = proof.siblings().to_vec();
                siblings[pos][byte] ^= 1 << bit;
                let tampered = Proof::new(siblings);
                assert!(!check_proof(&ls[3], &tampered, &root));
            }
        }
    }

    #[test]
    fn test_substituted_sibling_fails() {
        let ls = leaves(4);
        let tree = Tree::build(&ls).unwrap();
        let root = tree.root();
        let mut siblings = tree.proof(0).unwrap().siblings().to_vec();
        // validly shaped digest that was never in the tree
        siblings[0] = hasher::hash(b"impostor");
        assert!(!check_proof(&ls[0], &Proof::new(siblings), &root));
    }

    #[test]
    fn test_wrong_leaf_against_valid_proof_fails() {
        let ls = leaves(4);
        let tree = Tree::build(&ls).unwrap();
        let proof = tree.proof(1).unwrap();
        assert!(!check_proof(&ls[2], &proof, &tree.root()));
    }

    #[test]
    fn test_compute_root_matches_tree_root() {
        let ls = leaves(6);
        let tree = Tree::build(&ls).unwrap();
        for (i, leaf) in ls.iter().enumerate() {
            assert_eq!(compute_root(leaf, &tree.proof(i).unwrap()), tree.root());
        }
    }
}
