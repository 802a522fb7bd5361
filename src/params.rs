//! Parameter sets for the LWE-based GSW scheme.
//!
//! This module defines the scheme parameters: the secret dimension `n`, the
//! ciphertext modulus `q`, the number of LWE samples `m` in a public key,
//! and the noise bound for key-generation errors. The derived quantities
//! `ℓ = ⌈log₂ q⌉` and `N = (n+1)·ℓ` fix the ciphertext shape.
//!
//! # Example
//!
//! ```
//! use gsw_fhe::params::LweParams;
//!
//! let params = LweParams::toy_n4_q30();
//! assert!(params.validate().is_ok());
//! assert_eq!(params.ell(), 30);
//! assert_eq!(params.ct_width(), 150);
//! ```

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_params, Result};
use crate::math::modular;

/// Parameters of the LWE-based GSW scheme.
///
/// All shapes in the scheme derive from these values: secret keys are
/// `1 × (n+1)`, public keys `(n+1) × m`, and ciphertexts `(n+1) × N` with
/// `N = (n+1)·⌈log₂ q⌉`.
///
/// The defaults are toy-sized for pedagogy, not security. Callers who need
/// different correctness margins should adjust `q` and `noise_bound`
/// explicitly rather than rely on the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweParams {
    /// LWE secret dimension n.
    pub n: usize,

    /// Ciphertext modulus q >= 2.
    pub q: BigUint,

    /// Number of LWE samples per public key.
    ///
    /// Must be Ω(n·log q) for the security argument to apply; the default
    /// is `n·⌈log₂ q⌉ + 140`.
    pub m: usize,

    /// Bound for key-generation errors: each error term is drawn uniformly
    /// from `[-noise_bound, noise_bound]`.
    ///
    /// Decryption is correct while accumulated noise stays below `2^{ℓ-2}`,
    /// so this bound must be small against `q / (m·N)` to leave headroom
    /// for homomorphic gates.
    pub noise_bound: u64,
}

impl LweParams {
    /// Toy parameters: n = 4, q = 2^30, m = n·ℓ + 140 = 260, noise in
    /// [-6, 6].
    ///
    /// A fresh ciphertext carries noise at most `m·noise_bound = 1560`
    /// against a decision threshold of `2^28`, leaving margin for chains of
    /// several hundred sequential gates.
    pub fn toy_n4_q30() -> Self {
        let n = 4;
        let q = BigUint::one() << 30;
        let ell = modular::bit_len(&q);
        Self {
            n,
            q,
            m: n * ell + 140,
            noise_bound: 6,
        }
    }

    /// Derived bit length ℓ = ⌈log₂ q⌉.
    pub fn ell(&self) -> usize {
        modular::bit_len(&self.q)
    }

    /// Length of the secret key row vector: n + 1.
    pub fn sk_len(&self) -> usize {
        self.n + 1
    }

    /// Ciphertext column count N = (n+1)·ℓ.
    pub fn ct_width(&self) -> usize {
        self.sk_len() * self.ell()
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`](crate::Error::InvalidParameters)
    /// when `n` or `m` is zero, `q < 2`, or the noise bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(invalid_params!("n must be at least 1, got {}", self.n));
        }
        if self.m < 1 {
            return Err(invalid_params!("m must be at least 1, got {}", self.m));
        }
        if self.q < BigUint::from(2u32) {
            return Err(invalid_params!("q must be at least 2, got {}", self.q));
        }
        if self.noise_bound < 1 {
            return Err(invalid_params!("noise_bound must be at least 1"));
        }
        Ok(())
    }
}

impl Default for LweParams {
    fn default() -> Self {
        Self::toy_n4_q30()
    }
}
