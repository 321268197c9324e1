//! Error types for the DVSS core engine

/// Errors returned by share generation, reconstruction, and solvency proofs.
///
/// Every fallible operation reports its failure through this enum; nothing is
/// retried internally and no failure leaves residual state behind, so a failed
/// call never affects subsequent ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DvssError {
    /// Malformed generation or proof parameters (threshold out of range,
    /// secret outside the field, modulus too small, ...)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Fewer shares were supplied than the reconstruction threshold requires
    #[error("insufficient shares: threshold is {needed}, got {supplied}")]
    InsufficientShares { needed: usize, supplied: usize },

    /// Two supplied shares carry the same evaluation index, which would make
    /// the Lagrange denominator singular
    #[error("duplicate share index {0}")]
    DuplicateIndex(u64),

    /// The prover's balance is smaller than the payment it claims to cover
    #[error("balance is insufficient to cover the payment")]
    InsufficientBalance,

    /// A modular inverse does not exist. Unreachable for nonzero elements
    /// under a prime modulus; kept as a guard rather than an arithmetic fault.
    #[error("element is not invertible under the field modulus")]
    NotInvertible,

    /// A proof's coefficient sequences have the wrong length
    #[error("malformed proof: expected {expected} terms, got f_x={f_len}, g_x={g_len}")]
    MalformedProof {
        expected: usize,
        f_len: usize,
        g_len: usize,
    },
}
