//! Threshold share generation and Lagrange reconstruction
//!
//! A secret is bound to its generation context, spread over a fresh random
//! polynomial of degree `t - 1`, and evaluated at the indices `1..=n`. Any
//! `t` of the resulting shares recover the bound value by Lagrange
//! interpolation at `x = 0`; fewer than `t` reveal nothing about it. The
//! polynomial itself never leaves [`generate_shares`] — each call draws
//! fresh coefficients, which is what makes shares from different
//! generations unlinkable.

use std::collections::HashSet;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::context::{binding_offset, BindingContext};
use crate::error::DvssError;
use crate::field::PrimeField;
use crate::security::SensitiveScalar;

/// One evaluation point of the sharing polynomial.
///
/// The only artifact that leaves the engine; safe to hand to a distribution
/// layer. A share by itself carries no information about the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Share {
    /// Evaluation index in `[1, n]`, distinct within one generation
    pub index: u64,
    /// Polynomial value at `index`, an element of `Z_P`
    pub value: BigUint,
}

/// Computes a reconstruction threshold from runtime conditions.
///
/// Higher data sensitivity pushes the threshold up; higher system load and
/// access frequency pull it down, trading security margin for cheaper
/// reconstruction. The result is clamped to `[k_min, k_max]`:
///
/// `k = k_min + 5.0 * sensitivity - 4.0 * load - 3.0 * frequency`
///
/// The three inputs are expected in `[0, 1]`, but the clamp makes any input
/// safe. Feed the result to [`generate_shares`] as `t`.
pub fn dynamic_threshold(
    k_min: usize,
    k_max: usize,
    sensitivity: f64,
    load: f64,
    frequency: f64,
) -> usize {
    let k = k_min as f64 + 5.0 * sensitivity - 4.0 * load - 3.0 * frequency;
    // truncate, then clamp; written as nested min/max so a misordered
    // k_min/k_max pair degrades to k_min instead of panicking
    let k = k as i64;
    (k_min as i64).max((k_max as i64).min(k)) as usize
}

/// Splits a secret into `n` shares with reconstruction threshold `t`,
/// bound to the given context.
///
/// The constant coefficient of the sharing polynomial is
/// `(secret + binding_offset(ctx)) mod P`; the remaining `t - 1`
/// coefficients are drawn uniformly from `[1, P - 1]` using the supplied
/// CSPRNG and wiped when the call returns.
///
/// # Arguments
/// * `field` - the prime field to share over
/// * `secret` - the value to share, must lie in `[0, P)`
/// * `n` - number of shares to produce
/// * `t` - reconstruction threshold, `1 <= t <= n`
/// * `ctx` - generation context the secret is bound to
/// * `rng` - cryptographically secure randomness source
///
/// # Errors
/// Returns `InvalidParameters` if `t < 1`, `t > n`, `n == 0`, or the secret
/// is not a canonical field element.
pub fn generate_shares<R: RngCore + CryptoRng>(
    field: &PrimeField,
    secret: &BigUint,
    n: usize,
    t: usize,
    ctx: &BindingContext,
    rng: &mut R,
) -> Result<Vec<Share>, DvssError> {
    if n == 0 {
        return Err(DvssError::InvalidParameters(
            "number of shares must be at least 1".to_string(),
        ));
    }
    if t < 1 {
        return Err(DvssError::InvalidParameters(
            "threshold must be at least 1".to_string(),
        ));
    }
    if t > n {
        return Err(DvssError::InvalidParameters(format!(
            "threshold ({}) must not exceed number of shares ({})",
            t, n
        )));
    }
    if !field.contains(secret) {
        return Err(DvssError::InvalidParameters(
            "secret must be a canonical field element below the modulus".to_string(),
        ));
    }

    let offset = binding_offset(field, ctx);
    let bound = field.add(secret, &offset);

    // coefficient 0 is the bound secret, coefficients 1..t are random
    let mut coeffs: Vec<SensitiveScalar> = Vec::with_capacity(t);
    coeffs.push(SensitiveScalar::new(bound));
    for _ in 1..t {
        coeffs.push(SensitiveScalar::new(field.sample_nonzero(rng)));
    }

    let shares = (1..=n as u64)
        .map(|index| {
            let x = BigUint::from(index);
            // Horner evaluation, highest coefficient first
            let mut acc = BigUint::default();
            for c in coeffs.iter().rev() {
                acc = field.add(&field.mul(&acc, &x), c.expose_secret());
            }
            Share { index, value: acc }
        })
        .collect();

    debug!(n, t, node_id = %ctx.node_id, "generated threshold shares");
    Ok(shares)
}

/// Recovers the bound value (secret plus binding offset) from at least `t`
/// shares of a single generation.
///
/// Interpolates at `x = 0` over exactly the first `t` supplied shares; any
/// qualifying subset of one generation's output yields the identical
/// result. Mixing shares from different generations is unsupported — shares
/// carry no generation tag, so such a mix interpolates to garbage rather
/// than failing.
///
/// # Errors
/// * `InvalidParameters` if `t < 1`
/// * `DuplicateIndex` if any two supplied shares repeat an index
/// * `InsufficientShares` if fewer than `t` shares are supplied
/// * `NotInvertible` if an index difference is a multiple of the modulus,
///   which only happens when indices exceed the field size
pub fn reconstruct_bound(
    field: &PrimeField,
    shares: &[Share],
    t: usize,
) -> Result<BigUint, DvssError> {
    if t < 1 {
        return Err(DvssError::InvalidParameters(
            "threshold must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.index) {
            return Err(DvssError::DuplicateIndex(share.index));
        }
    }

    if shares.len() < t {
        return Err(DvssError::InsufficientShares {
            needed: t,
            supplied: shares.len(),
        });
    }

    let selected = &shares[..t];
    let mut secret = BigUint::default();

    for (i, share_i) in selected.iter().enumerate() {
        let x_i = BigUint::from(share_i.index);
        // basis_i = prod_{j != i} x_j / (x_j - x_i), evaluated at x = 0
        let mut basis = BigUint::from(1u32);
        for (j, share_j) in selected.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = BigUint::from(share_j.index);
            let denom = field.inv(&field.sub(&x_j, &x_i))?;
            basis = field.mul(&basis, &field.mul(&x_j, &denom));
        }
        secret = field.add(&secret, &field.mul(&share_i.value, &basis));
    }

    debug!(t, supplied = shares.len(), "reconstructed bound value");
    Ok(secret)
}

/// Recovers the original secret from at least `t` shares and the context
/// they were generated under.
///
/// Recomputes the binding offset from `ctx` and subtracts it from the
/// reconstructed bound value. Callers that do not hold the context can use
/// [`reconstruct_bound`] and undo the binding themselves.
///
/// # Errors
/// Same as [`reconstruct_bound`].
pub fn reconstruct_secret(
    field: &PrimeField,
    shares: &[Share],
    t: usize,
    ctx: &BindingContext,
) -> Result<BigUint, DvssError> {
    let bound = reconstruct_bound(field, shares, t)?;
    Ok(field.sub(&bound, &binding_offset(field, ctx)))
}
