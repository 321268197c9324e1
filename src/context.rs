//! Contextual binding of secrets to a generation event
//!
//! Every share generation mixes a context-derived field element (the binding
//! offset) into the secret before the polynomial is built, so that the same
//! secret shared twice under different contexts produces unrelated shares.
//! The offset is a pure function of the context: anyone holding the original
//! `(timestamp, node_id)` pair recomputes it later, which is what lets
//! [`reconstruct_secret`](crate::sharing::reconstruct_secret) undo the
//! binding. The flip side is that a context must never be reused across
//! logically distinct secrets if the offset is meant to stay unpredictable.

use crate::field::PrimeField;
use blake2::{Blake2b512, Digest};
use num_bigint::BigUint;

/// The generation context a secret is bound to: when it was shared and by
/// which node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingContext {
    /// Unix timestamp of the generation event
    pub timestamp: u64,
    /// Identifier of the generating node
    pub node_id: String,
}

impl BindingContext {
    /// Creates a context from a timestamp and node identifier.
    pub fn new(timestamp: u64, node_id: impl Into<String>) -> Self {
        BindingContext {
            timestamp,
            node_id: node_id.into(),
        }
    }
}

/// Derives the binding offset for a context: the Blake2b-512 digest of the
/// decimal timestamp followed by the node id, read as a big-endian integer
/// and reduced into the field.
///
/// Deterministic and side-effect free; identical contexts always map to the
/// identical offset.
pub fn binding_offset(field: &PrimeField, ctx: &BindingContext) -> BigUint {
    let mut hasher = Blake2b512::new();
    hasher.update(ctx.timestamp.to_string().as_bytes());
    hasher.update(ctx.node_id.as_bytes());
    let digest = hasher.finalize();

    field.reduce(&BigUint::from_bytes_be(&digest))
}
