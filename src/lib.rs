//! DVSS Core
//!
//! A dynamic threshold secret-sharing engine with per-shard contextual
//! binding, plus a linear balance-sufficiency proof.
//!
//! ## Overview
//!
//! A secret is split into `n` shares such that any `t` of them reconstruct
//! it while `t - 1` reveal nothing. Before sharing, the secret is bound to
//! its generation context (timestamp and node id) by a hash-derived offset,
//! so the same secret shared twice produces unrelated shares. A separate
//! solvency module asserts `balance >= payment` without disclosing either
//! value (with a documented verifier gap — see [`solvency`]).
//!
//! The engine is a pure compute core: no storage, no networking, no ledger
//! state. All operations work over a caller-constructed [`PrimeField`] and
//! a caller-supplied CSPRNG, so there is no hidden global state and every
//! call is safe to run concurrently.
//!
//! ## Key Components
//!
//! - **Field arithmetic**: modular add/sub/mul/pow/inverse over a runtime
//!   prime modulus
//! - **Context binding**: deterministic Blake2b-derived offset from
//!   `(timestamp, node_id)`
//! - **Share generation**: fresh random polynomial per call, evaluated at
//!   the indices `1..=n`
//! - **Reconstruction**: Lagrange interpolation at `x = 0` from any `t`
//!   shares of one generation
//! - **Solvency proofs**: linear zero-sum assertion, with individual and
//!   batch verification
//!
//! ## Example
//!
//! ```rust
//! use dvss_core::{
//!     context::BindingContext,
//!     field::PrimeField,
//!     sharing::{generate_shares, reconstruct_secret},
//!     solvency::{prove_solvency, verify_proof},
//! };
//! use num_bigint::BigUint;
//!
//! let field = PrimeField::new(BigUint::from(104729u32)).unwrap();
//! let ctx = BindingContext::new(1678901234, "NodeA");
//! let secret = BigUint::from(12345u32);
//! let mut rng = rand::thread_rng();
//!
//! // split into 5 shares, any 3 of which reconstruct
//! let shares = generate_shares(&field, &secret, 5, 3, &ctx, &mut rng).unwrap();
//! let recovered = reconstruct_secret(&field, &shares[..3], 3, &ctx).unwrap();
//! assert_eq!(recovered, secret);
//!
//! // assert solvency without revealing the amounts
//! let balance = BigUint::from(5000u32);
//! let proof = prove_solvency(&field, &balance, &balance, &mut rng).unwrap();
//! assert!(verify_proof(&field, &proof).unwrap());
//! ```

pub mod context;
pub mod error;
pub mod field;
pub mod security;
pub mod sharing;
pub mod solvency;

pub use context::{binding_offset, BindingContext};
pub use error::DvssError;
pub use field::PrimeField;
pub use sharing::{
    dynamic_threshold, generate_shares, reconstruct_bound, reconstruct_secret, Share,
};
pub use solvency::{
    prove_solvency, verify_batch, verify_proof, SolvencyProof, PROOF_TERMS,
};
