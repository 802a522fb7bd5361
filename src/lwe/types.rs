//! Key and ciphertext types for the GSW scheme.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::math::Matrix;

/// Secret key: row vector `s = [1 | t]` in Z_q^{1×(n+1)}.
///
/// The leading 1 lets the public key carry its noisy samples in the first
/// row; the remaining n entries are uniform in `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    /// The row vector, shape 1 × (n+1).
    pub s: Matrix,
    /// Ciphertext modulus.
    pub q: BigUint,
}

impl SecretKey {
    /// Length of the key vector, n+1.
    pub fn dim(&self) -> usize {
        self.s.cols()
    }
}

/// Public key: matrix `A` in Z_q^{(n+1)×m} with `s·A = e mod q` for small
/// error `e`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// The sample matrix, shape (n+1) × m.
    pub a: Matrix,
    /// Ciphertext modulus.
    pub q: BigUint,
}

impl PublicKey {
    /// Height of the key matrix, n+1.
    pub fn sk_len(&self) -> usize {
        self.a.rows()
    }

    /// Number of LWE samples m.
    pub fn samples(&self) -> usize {
        self.a.cols()
    }
}

/// Ciphertext: matrix `C` in Z_q^{(n+1)×N} with
/// `s·C = μ·s·G + noise mod q` for plaintext bit μ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// The ciphertext matrix, shape (n+1) × N.
    pub c: Matrix,
    /// Ciphertext modulus.
    pub q: BigUint,
}

/// A freshly generated public/secret key pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: SecretKey,
}
