//! Modular arithmetic over a runtime-configured prime field
//!
//! Every other component of the engine works over `Z_P` for a prime modulus
//! `P` that is injected at construction time rather than baked in as a
//! process-wide constant. The engine never checks primality itself; supplying
//! a prime is part of the caller's contract, and a composite modulus shows up
//! as [`DvssError::NotInvertible`] during reconstruction rather than being
//! silently accepted.

use crate::error::DvssError;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// The prime field `Z_P` all engine operations are computed in.
///
/// Cheap to clone and freely shareable across threads; holds nothing but the
/// modulus. Production deployments want a cryptographically sized prime
/// (2048 bits or more) — small moduli are fine for tests but leave the
/// secret open to exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Creates a field with the given prime modulus.
    ///
    /// # Errors
    /// Returns `InvalidParameters` if the modulus is smaller than 2.
    pub fn new(modulus: BigUint) -> Result<Self, DvssError> {
        if modulus < BigUint::from(2u32) {
            return Err(DvssError::InvalidParameters(format!(
                "modulus must be at least 2, got {}",
                modulus
            )));
        }
        Ok(PrimeField { modulus })
    }

    /// The field modulus `P`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `a` is a canonical field element, i.e. `a < P`.
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    /// Reduces an arbitrary integer into `[0, P)`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    /// `(a + b) mod P`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `(a - b) mod P`, wrapping into the field rather than underflowing.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    /// `(a * b) mod P`. Intermediate products are reduced immediately, so
    /// values never grow past `P^2`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) * self.reduce(b)) % &self.modulus
    }

    /// `a^e mod P` by square-and-multiply.
    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        self.reduce(a).modpow(e, &self.modulus)
    }

    /// Multiplicative inverse of `a` modulo `P`, by the extended Euclidean
    /// algorithm.
    ///
    /// # Errors
    /// Returns `NotInvertible` when `gcd(a, P) != 1`. With a prime modulus
    /// this only happens for `a ≡ 0 (mod P)`, but the gcd is checked rather
    /// than assumed.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, DvssError> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(DvssError::NotInvertible);
        }

        let modulus = BigInt::from(self.modulus.clone());
        let mut r0 = BigInt::from(a);
        let mut r1 = modulus.clone();
        // s tracks the Bezout coefficient of `a`
        let mut s0 = BigInt::one();
        let mut s1 = BigInt::zero();

        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            r0 = std::mem::replace(&mut r1, r2);
            let s2 = &s0 - &q * &s1;
            s0 = std::mem::replace(&mut s1, s2);
        }

        if !r0.is_one() {
            return Err(DvssError::NotInvertible);
        }

        // the reduced Bezout coefficient lies in [0, P), so the conversion
        // cannot fail; surfaced as NotInvertible rather than a panic
        let inv = ((s0 % &modulus) + &modulus) % &modulus;
        inv.to_biguint().ok_or(DvssError::NotInvertible)
    }

    /// Samples a uniform field element in `[0, P)`.
    pub fn sample<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.modulus)
    }

    /// Samples a uniform nonzero field element in `[1, P)`.
    pub fn sample_nonzero<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.modulus)
    }
}
