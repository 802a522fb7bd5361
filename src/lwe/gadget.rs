//! Gadget matrix G and the inverse-gadget operator G⁻¹.
//!
//! `G` has shape `r × r·ℓ`: row i carries the powers `[1, 2, ..., 2^{ℓ-1}]`
//! in columns `[i·ℓ, (i+1)·ℓ)` and zeros elsewhere. `G⁻¹` bit-decomposes a
//! matrix column-by-column so that `G · G⁻¹(C) = C mod q`; its `{0,1}`
//! entries are what keep noise growth under control in the homomorphic
//! gates.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math::{modular, Matrix};

/// Builds the gadget matrix for a key of height `rows` over modulus `q`.
///
/// Shape is `rows × rows·ℓ` with `ℓ = ⌈log₂ q⌉`.
pub fn gadget_matrix(rows: usize, q: &BigUint) -> Matrix {
    let ell = modular::bit_len(q);
    let width = rows * ell;

    let inner = (0..rows)
        .map(|i| {
            let mut row = vec![BigUint::zero(); width];
            for b in 0..ell {
                row[i * ell + b] = BigUint::one() << b;
            }
            row
        })
        .collect();

    Matrix::from_rows(inner)
}

/// Bit-decomposes `c` into a `{0,1}` matrix of shape `(r·ℓ) × k`.
///
/// Column j is the concatenation over rows i of the ℓ-bit decomposition of
/// `c[i, j]`, least significant bit first. Satisfies
/// `gadget_matrix(r, q) · gadget_inverse(c, q) = c mod q` whenever the
/// entries of `c` lie in `[0, 2^ℓ)`.
pub fn gadget_inverse(c: &Matrix, q: &BigUint) -> Matrix {
    let ell = modular::bit_len(q);
    let mut inner = vec![vec![BigUint::zero(); c.cols()]; c.rows() * ell];

    for i in 0..c.rows() {
        for j in 0..c.cols() {
            let bits = Matrix::decompose(c.get(i, j), ell);
            for b in 0..ell {
                inner[i * ell + b][j] = bits.get(b, 0).clone();
            }
        }
    }

    Matrix::from_rows(inner)
}
