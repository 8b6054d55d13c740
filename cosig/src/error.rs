/// Errors reported by tree construction, proof derivation and the
/// composite signing/verification entry points.
///
/// Negative verification outcomes (wrong signer, failed proof) are not
/// errors; they are reported through
/// [`Verification`](crate::composite::Verification) since calling code
/// must branch on them routinely.
#[derive(thiserror::Error, Debug)]
pub enum CosigError {
    #[error("Cosig: message set is empty, nothing to commit")]
    EmptyLeafSet,

    #[error("Cosig: leaf index {index} out of range for {leaf_count} leaves")]
    LeafIndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Cosig: proof index {index} out of range, only {proof_count} messages were committed")]
    ProofIndexOutOfRange { index: usize, proof_count: usize },

    #[error("Cosig: signature blob must be 65 bytes, got {length}")]
    MalformedSignature { length: usize },

    #[error("Cosig: signature blob does not parse: {0}")]
    SignatureParse(#[from] alloy::primitives::SignatureError),

    #[error("Cosig: signing the merkle root failed: {0}")]
    Signer(#[from] alloy::signers::Error),

    #[error("Cosig: transport encoding failed: {0}")]
    Transport(#[from] bincode::Error),
}
