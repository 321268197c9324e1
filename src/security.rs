//! Memory hygiene for secret polynomial material
//!
//! Polynomial coefficients exist only for the duration of one generation
//! call and must never outlive it; this wrapper makes sure they are wiped
//! when dropped and never leak through `Debug` output.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A field element that is overwritten on drop.
///
/// Used for the random polynomial coefficients drawn during share
/// generation. `BigUint` does not expose its limb buffer for direct
/// scrubbing, so zeroization assigns the zero value, which drops and
/// releases the original allocation.
#[derive(Clone)]
pub struct SensitiveScalar {
    value: BigUint,
}

impl SensitiveScalar {
    /// Wraps a field element.
    pub fn new(value: BigUint) -> Self {
        SensitiveScalar { value }
    }

    /// Borrows the inner value.
    ///
    /// The caller must not copy the value somewhere it will outlive the
    /// wrapper.
    pub fn expose_secret(&self) -> &BigUint {
        &self.value
    }
}

impl Zeroize for SensitiveScalar {
    fn zeroize(&mut self) {
        self.value = BigUint::zero();
    }
}

impl ZeroizeOnDrop for SensitiveScalar {}

impl Drop for SensitiveScalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl std::fmt::Debug for SensitiveScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SensitiveScalar([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let s = SensitiveScalar::new(BigUint::from(12345u32));
        assert_eq!(format!("{:?}", s), "SensitiveScalar([REDACTED])");
    }

    #[test]
    fn zeroize_clears_the_value() {
        let mut s = SensitiveScalar::new(BigUint::from(12345u32));
        s.zeroize();
        assert!(s.expose_secret().is_zero());
    }
}
