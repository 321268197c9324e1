//! Linear balance-sufficiency proofs
//!
//! A prover holding `balance` and `payment` emits a proof object that a
//! verifier can check without learning either value. The construction is a
//! toy linear relation, reproduced faithfully from the reference scheme:
//! `f_x[k] = (balance - payment) * g_x[k] mod P` for three fresh random
//! `g_x` terms, and the verifier accepts when `sum(f_x)` vanishes.
//!
//! Known gap, kept by design rather than repaired: the zero-sum check
//! accepts exactly when `balance == payment`. The claimed inequality
//! `balance >= payment` is enforced only by the prover's plaintext
//! precondition, never by the verifier. Treat the verifier as an equality
//! test and the prover's error as the actual solvency gate.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use tracing::debug;

use crate::error::DvssError;
use crate::field::PrimeField;

/// Number of coefficient terms in each half of a solvency proof.
pub const PROOF_TERMS: usize = 3;

/// A balance-sufficiency assertion over `Z_P`.
///
/// Conceptually single-use: reusing a `g_x` sequence across proofs with
/// different balance/payment pairs lets an observer relate the hidden
/// differences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolvencyProof {
    /// `f_x[k] = (balance - payment) * g_x[k] mod P`
    pub f_x: Vec<BigUint>,
    /// Fresh random nonzero field elements, drawn per proof
    pub g_x: Vec<BigUint>,
}

impl SolvencyProof {
    fn check_shape(&self) -> Result<(), DvssError> {
        if self.f_x.len() != PROOF_TERMS || self.g_x.len() != PROOF_TERMS {
            return Err(DvssError::MalformedProof {
                expected: PROOF_TERMS,
                f_len: self.f_x.len(),
                g_len: self.g_x.len(),
            });
        }
        Ok(())
    }

    fn f_sum(&self, field: &PrimeField) -> BigUint {
        self.f_x
            .iter()
            .fold(BigUint::zero(), |acc, f| field.add(&acc, f))
    }
}

/// Builds a proof that `balance >= payment` without embedding either value.
///
/// The inequality itself is checked here, in plaintext, before any field
/// arithmetic: a prover necessarily knows both values, and only a verifier
/// without them learns nothing beyond the proof's validity.
///
/// # Errors
/// * `InvalidParameters` if balance or payment is not a canonical field
///   element
/// * `InsufficientBalance` if `balance < payment`
pub fn prove_solvency<R: RngCore + CryptoRng>(
    field: &PrimeField,
    balance: &BigUint,
    payment: &BigUint,
    rng: &mut R,
) -> Result<SolvencyProof, DvssError> {
    if !field.contains(balance) || !field.contains(payment) {
        return Err(DvssError::InvalidParameters(
            "balance and payment must be canonical field elements".to_string(),
        ));
    }
    if balance < payment {
        return Err(DvssError::InsufficientBalance);
    }

    let diff = field.sub(balance, payment);
    let g_x: Vec<BigUint> = (0..PROOF_TERMS)
        .map(|_| field.sample_nonzero(rng))
        .collect();
    let f_x = g_x.iter().map(|g| field.mul(&diff, g)).collect();

    debug!("built solvency proof");
    Ok(SolvencyProof { f_x, g_x })
}

/// Checks a single solvency proof: accepts iff `sum(f_x) == 0 mod P`.
///
/// See the module docs for the semantics this check actually provides.
///
/// # Errors
/// Returns `MalformedProof` when either coefficient sequence does not have
/// exactly [`PROOF_TERMS`] entries.
pub fn verify_proof(field: &PrimeField, proof: &SolvencyProof) -> Result<bool, DvssError> {
    proof.check_shape()?;
    Ok(proof.f_sum(field).is_zero())
}

/// Aggregate check over many proofs: accepts iff the sum of every proof's
/// `sum(f_x)` vanishes mod `P`.
///
/// Strictly weaker than verifying each proof individually — residues of two
/// invalid proofs can cancel across the batch. This is an aggregate sanity
/// check, not a substitute for [`verify_proof`].
///
/// # Errors
/// Returns `MalformedProof` if any proof in the batch has the wrong shape.
pub fn verify_batch(field: &PrimeField, proofs: &[SolvencyProof]) -> Result<bool, DvssError> {
    for proof in proofs {
        proof.check_shape()?;
    }

    let total = proofs
        .par_iter()
        .map(|proof| proof.f_sum(field))
        .reduce(BigUint::zero, |a, b| field.add(&a, &b));

    debug!(batch = proofs.len(), "verified proof batch");
    Ok(total.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    // the reference deployment's prime, 2^127 - 1
    fn field() -> PrimeField {
        let p: BigUint = "170141183460469231731687303715884105727".parse().unwrap();
        PrimeField::new(p).unwrap()
    }

    #[test]
    fn equal_balance_and_payment_verifies() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(29);
        let amount = BigUint::from(5000u32);

        let proof = prove_solvency(&field, &amount, &amount, &mut rng).unwrap();
        assert!(verify_proof(&field, &proof).unwrap());
    }

    #[test]
    fn insufficient_balance_is_rejected_by_the_prover() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(31);
        assert_eq!(
            prove_solvency(
                &field,
                &BigUint::from(100u32),
                &BigUint::from(101u32),
                &mut rng
            ),
            Err(DvssError::InsufficientBalance)
        );
    }

    #[test]
    fn strict_surplus_fails_the_zero_sum_check() {
        // the documented gap: the verifier only recognizes exact equality,
        // so a perfectly solvent prover with balance > payment is refused
        let field = field();
        let mut rng = StdRng::seed_from_u64(37);

        let proof = prove_solvency(
            &field,
            &BigUint::from(5000u32),
            &BigUint::from(100u32),
            &mut rng,
        )
        .unwrap();
        assert!(!verify_proof(&field, &proof).unwrap());
    }

    #[test]
    fn non_canonical_amounts_are_rejected() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(41);
        assert!(matches!(
            prove_solvency(&field, field.modulus(), &BigUint::from(1u32), &mut rng),
            Err(DvssError::InvalidParameters(_))
        ));
    }

    #[test]
    fn malformed_proofs_are_rejected() {
        let field = field();
        let proof = SolvencyProof {
            f_x: vec![BigUint::zero(); 2],
            g_x: vec![BigUint::zero(); 3],
        };
        assert_eq!(
            verify_proof(&field, &proof),
            Err(DvssError::MalformedProof {
                expected: PROOF_TERMS,
                f_len: 2,
                g_len: 3
            })
        );
        assert!(verify_batch(&field, &[proof]).is_err());
    }

    #[test]
    fn batch_verification_accepts_a_valid_batch() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(43);

        let proofs: Vec<SolvencyProof> = (0..8)
            .map(|k| {
                let amount = BigUint::from(1000u32 + k);
                prove_solvency(&field, &amount, &amount, &mut rng).unwrap()
            })
            .collect();
        assert!(verify_batch(&field, &proofs).unwrap());
        assert!(verify_batch(&field, &[]).unwrap());
    }

    #[test]
    fn batch_verification_masks_cancelling_residues() {
        // two individually invalid proofs whose residues are +k and -k:
        // the aggregate check cannot tell them from a fully valid batch,
        // which is exactly why it is only a sanity check
        let field = field();
        let k = BigUint::from(12345u32);
        let one = BigUint::from(1u32);

        let plus = SolvencyProof {
            f_x: vec![k.clone(), BigUint::zero(), BigUint::zero()],
            g_x: vec![one.clone(); 3],
        };
        let minus = SolvencyProof {
            f_x: vec![
                field.sub(&BigUint::zero(), &k),
                BigUint::zero(),
                BigUint::zero(),
            ],
            g_x: vec![one; 3],
        };

        assert!(!verify_proof(&field, &plus).unwrap());
        assert!(!verify_proof(&field, &minus).unwrap());
        assert!(verify_batch(&field, &[plus, minus]).unwrap());
    }
}
