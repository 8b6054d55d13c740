//! Composite signing and per-message verification.
//!
//! Generation hashes every encoded message to a leaf, commits the leaves
//! into a [`Tree`], signs the root once, and derives one inclusion proof
//! per original message. Verification recovers the signer from the root
//! signature and recomputes the root from one message's proof; both checks
//! are independent and both outcomes are reported.

use alloy::primitives::{Address, PrimitiveSignature, B256};
use alloy::signers::SignerSync;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::def::SIGNATURE_LENGTH;
use crate::error::CosigError;
use crate::merkletree::proof::{check_proof, Proof};
use crate::merkletree::tree::Tree;
use crate::utils::hasher::{self, Hash32};

/// The output of a composite signing operation: one signed Merkle root
/// committing to the whole message set, and one inclusion proof per
/// message, aligned with the original input order.
///
/// Padding positions never get a proof, so `proofs.len()` is the original
/// message count, not the padded leaf count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositeSignature {
    merkle_root: Hash32,
    signature: PrimitiveSignature,
    proofs: Vec<Proof>,
}

/// Outcome of verifying one message against a composite signature.
///
/// The two checks are independent: a valid proof against a root the
/// expected party never signed must fail, and a valid signature over a
/// root the message is not part of must fail. Callers get both flags so
/// the failure reasons stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verification {
    /// The signature over the Merkle root recovers to the expected signer.
    pub signer_ok: bool,
    /// The message's leaf digest recomputes to the Merkle root through the
    /// proof.
    pub proof_ok: bool,
}

impl Verification {
    /// True iff both the signature and the inclusion proof check out.
    pub fn is_valid(&self) -> bool {
        self.signer_ok && self.proof_ok
    }
}

impl CompositeSignature {
    /// The signed Merkle root.
    pub fn merkle_root(&self) -> Hash32 {
        self.merkle_root
    }

    /// The signature over the Merkle root.
    pub fn signature(&self) -> &PrimitiveSignature {
        &self.signature
    }

    /// The signature as the 65-byte `r || s || v` blob of the wire surface.
    pub fn signature_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.signature.as_bytes()
    }

    /// All inclusion proofs, aligned 1:1 with the original message order.
    pub fn proofs(&self) -> &[Proof] {
        &self.proofs
    }

    /// Number of messages committed into the root.
    pub fn message_count(&self) -> usize {
        self.proofs.len()
    }

    /// The proof for the message that sat at `index` in the original set.
    ///
    /// # Errors
    /// [`CosigError::ProofIndexOutOfRange`] when `index` is past the
    /// committed message count, i.e. the message was never part of this
    /// commitment.
    pub fn proof(&self, index: usize) -> Result<&Proof, CosigError> {
        self.proofs.get(index).ok_or(CosigError::ProofIndexOutOfRange {
            index,
            proof_count: self.proofs.len(),
        })
    }

    /// Verifies the message at `index` against this composite signature.
    ///
    /// Convenience over [`verify_message`] for callers holding the whole
    /// composite signature rather than a single detached proof.
    pub fn verify_at(
        &self,
        index: usize,
        encoded_message: &[u8],
        expected_signer: Address,
    ) -> Result<Verification, CosigError> {
        verify_message(
            encoded_message,
            self.proof(index)?,
            &self.merkle_root,
            &self.signature.as_bytes(),
            expected_signer,
        )
    }

    /// Encodes the composite signature for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CosigError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a composite signature produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CosigError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Commits the ordered message set into one signed Merkle root.
///
/// Each element of `messages` is the already-encoded byte payload of one
/// typed-data message; this function never inspects message internals.
/// Input order is significant: it fixes leaf positions and therefore proof
/// indices.
///
/// # Arguments
/// * `signer` - The signing capability; only ever sees the 32-byte root
/// * `messages` - Ordered, non-empty set of encoded messages
///
/// # Errors
/// [`CosigError::EmptyLeafSet`] for an empty set (rejected before any
/// hashing), or [`CosigError::Signer`] when the signer refuses the root.
pub fn sign_messages<S, M>(signer: &S, messages: &[M]) -> Result<CompositeSignature, CosigError>
where
    S: SignerSync,
    M: AsRef<[u8]>,
{
    let leaves: Vec<Hash32> = messages.iter().map(|m| hasher::hash(m)).collect();
    let tree = Tree::build(&leaves)?;
    let root = tree.root();
    let signature = signer.sign_hash_sync(&B256::from(root))?;
    let proofs = (0..messages.len())
        .map(|i| tree.proof(i))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "committed {} messages into root {} ({} padded leaves)",
        messages.len(),
        B256::from(root),
        tree.leaf_count()
    );
    Ok(CompositeSignature {
        merkle_root: root,
        signature,
        proofs,
    })
}

/// Verifies one message against a detached proof, root and signature.
///
/// Recovery and proof recomputation run independently; see
/// [`Verification`]. Negative outcomes are values, not errors.
///
/// # Arguments
/// * `encoded_message` - The encoded payload of the message being checked
/// * `proof` - The message's inclusion proof
/// * `merkle_root` - The root the counterparty claims was signed
/// * `signature` - 65-byte `r || s || v` blob
/// * `expected_signer` - Address the signature must recover to
///
/// # Errors
/// [`CosigError::MalformedSignature`] when the blob is not 65 bytes, and
/// [`CosigError::SignatureParse`] when the 65 bytes do not parse; both are
/// reported before any recovery, distinct from a cryptographic mismatch.
pub fn verify_message(
    encoded_message: &[u8],
    proof: &Proof,
    merkle_root: &Hash32,
    signature: &[u8],
    expected_signer: Address,
) -> Result<Verification, CosigError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(CosigError::MalformedSignature {
            length: signature.len(),
        });
    }
    let signature = PrimitiveSignature::from_raw(signature)?;
    let signer_ok = match signature.recover_address_from_prehash(&B256::from(*merkle_root)) {
        Ok(recovered) => recovered == expected_signer,
        // recovery failure is a normal negative outcome, same as a
        // wrong-signer result
        Err(_) => false,
    };
    let leaf = hasher::hash(encoded_message);
    let proof_ok = check_proof(&leaf, proof, merkle_root);
    Ok(Verification { signer_ok, proof_ok })
}
