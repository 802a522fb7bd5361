//! Homomorphic boolean gates.
//!
//! Every gate maps ciphertexts of shape `(n+1) × N` to a ciphertext of the
//! same shape. The multiplicative gates multiply by `G⁻¹` of an operand,
//! whose `{0,1}` entries bound noise growth by a factor of `N + 1` per
//! gate.

use num_bigint::BigUint;

use crate::error::{malformed, Result};
use crate::math::modular;

use super::gadget::{gadget_inverse, gadget_matrix};
use super::types::{Ciphertext, PublicKey};

fn check_operand(ct: &Ciphertext, pk: &PublicKey) -> Result<()> {
    let rows = pk.sk_len();
    let width = rows * modular::bit_len(&pk.q);
    if ct.c.rows() != rows || ct.c.cols() != width {
        return Err(malformed!(
            "ciphertext with dimensions {}x{} is not a valid {}x{} ciphertext under this key",
            ct.c.rows(),
            ct.c.cols(),
            rows,
            width
        ));
    }
    Ok(())
}

/// Homomorphic NOT: `G - C mod q`.
///
/// `s·(G - C) = (1 - μ)·s·G - noise`, decrypting to `¬μ`.
pub fn not(ct: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    check_operand(ct, pk)?;
    let q = &pk.q;
    let c = gadget_matrix(pk.sk_len(), q).sub(&ct.c, q)?;
    Ok(Ciphertext { c, q: q.clone() })
}

/// Homomorphic AND: `C1 · G⁻¹(C2) mod q`.
///
/// `s·C1·G⁻¹(C2) = μ1·μ2·s·G + noise'` with
/// `|noise'| <= N·|noise1| + |noise2|`.
pub fn and(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    check_operand(c1, pk)?;
    check_operand(c2, pk)?;
    let q = &pk.q;
    let c = c1.c.mul(&gadget_inverse(&c2.c, q), q)?;
    Ok(Ciphertext { c, q: q.clone() })
}

/// Homomorphic NAND: `G - C1·G⁻¹(C2) mod q`.
pub fn nand(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    let product = and(c1, c2, pk)?;
    let q = &pk.q;
    let c = gadget_matrix(pk.sk_len(), q).sub(&product.c, q)?;
    Ok(Ciphertext { c, q: q.clone() })
}

/// Homomorphic OR, via De Morgan: `¬(¬μ1 ∧ ¬μ2)`.
pub fn or(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    not(&and(&not(c1, pk)?, &not(c2, pk)?, pk)?, pk)
}

/// Homomorphic XOR: `(C1 + C2) - 2·(C1·G⁻¹(C2)) mod q`.
///
/// `μ1 + μ2 - 2·μ1·μ2` is exactly `μ1 ⊕ μ2` over the integers.
pub fn xor(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    let product = and(c1, c2, pk)?;
    let q = &pk.q;
    let c = c1
        .c
        .add(&c2.c, q)?
        .sub(&product.c.scalar_mul(&BigUint::from(2u32), q), q)?;
    Ok(Ciphertext { c, q: q.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lwe::enc::{decrypt, encrypt, generate_key};
    use crate::lwe::types::KeyPair;
    use crate::math::{Matrix, NoiseSampler};
    use crate::params::LweParams;
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn test_params() -> LweParams {
        LweParams {
            n: 2,
            q: BigUint::one() << 20,
            m: 60,
            noise_bound: 4,
        }
    }

    fn test_keys(seed: u64) -> (LweParams, KeyPair, ChaCha20Rng) {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, seed.wrapping_add(1));
        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();
        (params, keys, rng)
    }

    #[test]
    fn not_gate_truth_table() {
        let (_, keys, mut rng) = test_keys(21);
        for m in [false, true] {
            let ct = encrypt(m, &keys.public, &mut rng).unwrap();
            let result = not(&ct, &keys.public).unwrap();
            assert_eq!(decrypt(&result, &keys.secret).unwrap(), !m);
        }
    }

    #[test]
    fn and_gate_truth_table() {
        let (_, keys, mut rng) = test_keys(22);
        for m1 in [false, true] {
            for m2 in [false, true] {
                let c1 = encrypt(m1, &keys.public, &mut rng).unwrap();
                let c2 = encrypt(m2, &keys.public, &mut rng).unwrap();
                let result = and(&c1, &c2, &keys.public).unwrap();
                assert_eq!(
                    decrypt(&result, &keys.secret).unwrap(),
                    m1 & m2,
                    "AND({}, {})",
                    m1,
                    m2
                );
            }
        }
    }

    #[test]
    fn nand_gate_truth_table() {
        let (_, keys, mut rng) = test_keys(23);
        for m1 in [false, true] {
            for m2 in [false, true] {
                let c1 = encrypt(m1, &keys.public, &mut rng).unwrap();
                let c2 = encrypt(m2, &keys.public, &mut rng).unwrap();
                let result = nand(&c1, &c2, &keys.public).unwrap();
                assert_eq!(
                    decrypt(&result, &keys.secret).unwrap(),
                    !(m1 & m2),
                    "NAND({}, {})",
                    m1,
                    m2
                );
            }
        }
    }

    #[test]
    fn or_gate_truth_table() {
        let (_, keys, mut rng) = test_keys(24);
        for m1 in [false, true] {
            for m2 in [false, true] {
                let c1 = encrypt(m1, &keys.public, &mut rng).unwrap();
                let c2 = encrypt(m2, &keys.public, &mut rng).unwrap();
                let result = or(&c1, &c2, &keys.public).unwrap();
                assert_eq!(
                    decrypt(&result, &keys.secret).unwrap(),
                    m1 | m2,
                    "OR({}, {})",
                    m1,
                    m2
                );
            }
        }
    }

    #[test]
    fn xor_gate_truth_table() {
        let (_, keys, mut rng) = test_keys(25);
        for m1 in [false, true] {
            for m2 in [false, true] {
                let c1 = encrypt(m1, &keys.public, &mut rng).unwrap();
                let c2 = encrypt(m2, &keys.public, &mut rng).unwrap();
                let result = xor(&c1, &c2, &keys.public).unwrap();
                assert_eq!(
                    decrypt(&result, &keys.secret).unwrap(),
                    m1 ^ m2,
                    "XOR({}, {})",
                    m1,
                    m2
                );
            }
        }
    }

    #[test]
    fn gates_reject_foreign_shapes() {
        let (params, keys, mut rng) = test_keys(26);
        let good = encrypt(true, &keys.public, &mut rng).unwrap();
        let bogus = Ciphertext {
            c: Matrix::zero(2, 10),
            q: params.q.clone(),
        };

        assert!(not(&bogus, &keys.public).is_err());
        assert!(and(&good, &bogus, &keys.public).is_err());
        assert!(and(&bogus, &good, &keys.public).is_err());
        assert!(or(&good, &bogus, &keys.public).is_err());
        assert!(nand(&bogus, &good, &keys.public).is_err());
        assert!(xor(&good, &bogus, &keys.public).is_err());
    }
}
