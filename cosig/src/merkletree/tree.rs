//! Construction of the balanced commitment tree.
//!
//! A [`Tree`] is built once from an ordered slice of leaf digests and is
//! immutable afterwards. The leaf layer is right-padded with [`ZERO_HASH32`]
//! to the next power of two, so every level halves cleanly and every leaf
//! gets a proof of the same length, `log2(padded leaf count)`.

use rayon::{iter::ParallelIterator, slice::ParallelSlice};

use crate::def::PARALLEL_HASH_MIN_LEVEL_LEN;
use crate::error::CosigError;
use crate::merkletree::proof::Proof;
use crate::utils::hasher::{self, Hash32, ZERO_HASH32};

/// A fully built Merkle tree: the ordered sequence of levels from the
/// padded leaf layer (level 0) up to the single-digest root level.
///
/// The tree is a pure function of its (ordered) input leaves. It is kept
/// around only as long as proofs need to be derived from it; verification
/// never needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    levels: Vec<Vec<Hash32>>,
}

impl Tree {
    /// Builds the tree over the given leaf digests.
    ///
    /// Pads the leaf layer with [`ZERO_HASH32`] to the smallest power of two
    /// `>= leaves.len()`, then derives each level by hashing adjacent pairs
    /// with the canonical sort-before-hash rule until a single digest is
    /// left. A single leaf yields a height-0 tree whose root is that leaf.
    ///
    /// # Arguments
    /// * `leaves` - Ordered, already-hashed leaf digests; must be non-empty
    ///
    /// # Errors
    /// [`CosigError::EmptyLeafSet`] if `leaves` is empty. Nothing is hashed
    /// in that case.
    pub fn build(leaves: &[Hash32]) -> Result<Tree, CosigError> {
        if leaves.is_empty() {
            return Err(CosigError::EmptyLeafSet);
        }
        let padded_len = leaves.len().next_power_of_two();
        let mut current = Vec::with_capacity(padded_len);
        current.extend_from_slice(leaves);
        current.resize(padded_len, ZERO_HASH32);

        let mut levels = Vec::with_capacity(padded_len.trailing_zeros() as usize + 1);
        while current.len() > 1 {
            let next = next_level(&current);
            levels.push(current);
            current = next;
        }
        levels.push(current);
        Ok(Tree { levels })
    }

    /// Returns the root digest, `levels[last][0]`.
    pub fn root(&self) -> Hash32 {
        self.levels[self.levels.len() - 1][0]
    }

    /// Returns the padded leaf count (always a power of two).
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Returns the tree height, i.e. the number of siblings in every proof.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Returns the full level structure, level 0 being the padded leaves.
    pub fn levels(&self) -> &[Vec<Hash32>] {
        &self.levels
    }

    /// Derives the inclusion proof for the leaf at `leaf_index`.
    ///
    /// Walks upward emitting the sibling at `index ^ 1` on each level and
    /// halving the index, stopping below the root level. For a height-0
    /// tree the proof is empty.
    ///
    /// # Errors
    /// [`CosigError::LeafIndexOutOfRange`] if `leaf_index` is not below the
    /// padded leaf count; no partial proof is returned.
    pub fn proof(&self, leaf_index: usize) -> Result<Proof, CosigError> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(CosigError::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }
        let mut siblings = Vec::with_capacity(self.height());
        let mut index = leaf_index;
        for level in &self.levels[..self.levels.len() - 1] {
            siblings.push(level[index ^ 1]);
            index >>= 1;
        }
        Ok(Proof::new(siblings))
    }
}

/// Derives one level from the one below it by pair hashing.
///
/// Pairs within a level have no data dependency on each other, so wide
/// levels are hashed on the rayon pool.
fn next_level(level: &[Hash32]) -> Vec<Hash32> {
    debug_assert!(level.len() >= 2 && level.len().is_power_of_two());
    if level.len() >= PARALLEL_HASH_MIN_LEVEL_LEN {
        level
            .par_chunks(2)
            .map(|pair| hasher::hash_pair(&pair[0], &pair[1]))
            .collect()
    } else {
        level
            .chunks(2)
            .map(|pair| hasher::hash_pair(&pair[0], &pair[1]))
            .collect()
    }
}
