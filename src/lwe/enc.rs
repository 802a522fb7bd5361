//! Key generation, encryption, and decryption.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{malformed, Result};
use crate::math::{modular, Matrix, NoiseSampler, RandomSource};
use crate::params::LweParams;

use super::gadget::gadget_matrix;
use super::types::{Ciphertext, KeyPair, PublicKey, SecretKey};

/// Generates a key pair for the given parameters.
///
/// The secret key is `s = [1 | t]` with `t` uniform in Z_q^n. The public
/// key stacks `a = e - t·B mod q` on top of a uniform `B` in Z_q^{n×m},
/// so that `s·A = e mod q` with `e` drawn from the noise sampler.
///
/// # Errors
///
/// Fails if the parameters do not validate. Output is a pure function of
/// the randomness consumed from `rng` and `noise`.
pub fn generate_key<R: RandomSource>(
    params: &LweParams,
    rng: &mut R,
    noise: &mut NoiseSampler,
) -> Result<KeyPair> {
    params.validate()?;
    let q = &params.q;
    let n = params.n;
    let m = params.m;

    // s = [1 | t]
    let t = Matrix::random(1, n, rng, q);
    let mut s_row = Vec::with_capacity(n + 1);
    s_row.push(BigUint::one());
    s_row.extend(t.row(0).iter().cloned());
    let s = Matrix::from_rows(vec![s_row]);

    let b = Matrix::random(n, m, rng, q);

    let e_row: Vec<BigUint> = noise
        .sample_vec(m)
        .into_iter()
        .map(|v| modular::from_signed(v, q))
        .collect();
    let e = Matrix::from_rows(vec![e_row]);

    // a = e - t·B, A = [a; B]
    let mut a = e.sub(&t.mul(&b, q)?, q)?;
    for i in 0..n {
        a = a.append_row(b.row(i))?;
    }

    Ok(KeyPair {
        public: PublicKey { a, q: q.clone() },
        secret: SecretKey { s, q: q.clone() },
    })
}

/// Encrypts one bit under the public key: `C = A·R + μ·G mod q` with `R`
/// uniform in `{0,1}^{m×N}`.
///
/// Two encryptions of the same bit differ with overwhelming probability
/// thanks to the fresh `R`.
pub fn encrypt<R: RandomSource>(bit: bool, pk: &PublicKey, rng: &mut R) -> Result<Ciphertext> {
    let q = &pk.q;
    let rows = pk.sk_len();
    let width = rows * modular::bit_len(q);

    let r = Matrix::random_bits(pk.samples(), width, rng);
    let mu = if bit { BigUint::one() } else { BigUint::zero() };
    let c = pk
        .a
        .mul(&r, q)?
        .add(&gadget_matrix(rows, q).scalar_mul(&mu, q), q)?;

    Ok(Ciphertext { c, q: q.clone() })
}

/// Decrypts a ciphertext with the secret key.
///
/// Computes `u = s·C mod q` and reads the coefficient at column `ℓ-1`,
/// the last column of the gadget block multiplied by the leading 1 of
/// `s`, where `s·G` contributes exactly `2^{ℓ-1} ≈ q/2`. The bit is
/// decided by whether the centred value is closer to `2^{ℓ-1}` than to 0.
/// Correct while accumulated noise stays below `2^{ℓ-2}`.
///
/// # Errors
///
/// Fails with a malformed-matrix error if the ciphertext shape does not
/// match the secret key.
pub fn decrypt(ct: &Ciphertext, sk: &SecretKey) -> Result<bool> {
    let q = &sk.q;
    let ell = modular::bit_len(q);
    let rows = sk.dim();
    let width = rows * ell;

    if ct.c.rows() != rows || ct.c.cols() != width {
        return Err(malformed!(
            "ciphertext with dimensions {}x{} does not match secret key of length {} (expected {}x{})",
            ct.c.rows(),
            ct.c.cols(),
            rows,
            rows,
            width
        ));
    }

    // The leading entry of s is 1, so the first gadget block of s·G is
    // unscaled; its top power-of-two column carries mu * 2^(l-1).
    let u = sk.s.mul(&ct.c, q)?;
    let idx = ell - 1;
    let v = modular::to_centered(u.get(0, idx), q);

    // |v| > 2^{ℓ-2} means closer to 2^{ℓ-1} than to 0
    let threshold = if ell >= 2 {
        num_bigint::BigInt::one() << (ell - 2)
    } else {
        num_bigint::BigInt::zero()
    };
    Ok(v.magnitude() > threshold.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn key_shapes() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 2);

        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();
        assert_eq!(keys.secret.s.rows(), 1);
        assert_eq!(keys.secret.dim(), 3);
        assert_eq!(keys.public.a.rows(), 3);
        assert_eq!(keys.public.samples(), 60);
        assert_eq!(keys.secret.s.get(0, 0), &BigUint::one());
    }

    #[test]
    fn secret_key_annihilates_public_key() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 4);

        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();
        let sa = keys.secret.s.mul(&keys.public.a, &params.q).unwrap();

        // s·A = e, so every coefficient is small after centring
        let bound = num_bigint::BigInt::from(params.noise_bound);
        for j in 0..sa.cols() {
            let v = modular::to_centered(sa.get(0, j), &params.q);
            assert!(
                v.magnitude() <= bound.magnitude(),
                "s·A coefficient {} too large: {}",
                j,
                v
            );
        }
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 6);
        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();

        for bit in [false, true] {
            let ct = encrypt(bit, &keys.public, &mut rng).unwrap();
            assert_eq!(ct.c.rows(), 3);
            assert_eq!(ct.c.cols(), params.ct_width());
            assert_eq!(
                decrypt(&ct, &keys.secret).unwrap(),
                bit,
                "Dec(Enc(m)) != m for m = {}",
                bit
            );
        }
    }

    #[test]
    fn encryption_is_randomized() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 8);
        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();

        let c1 = encrypt(true, &keys.public, &mut rng).unwrap();
        let c2 = encrypt(true, &keys.public, &mut rng).unwrap();
        assert_ne!(c1, c2, "two encryptions of the same bit must differ");
    }

    #[test]
    fn key_generation_is_randomized() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 10);

        let k1 = generate_key(&params, &mut rng, &mut noise).unwrap();
        let k2 = generate_key(&params, &mut rng, &mut noise).unwrap();
        assert_ne!(k1, k2, "independent key pairs must differ");
    }

    #[test]
    fn decrypt_rejects_wrong_shape() {
        let params = test_params();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut noise = NoiseSampler::with_seed(params.noise_bound, 12);
        let keys = generate_key(&params, &mut rng, &mut noise).unwrap();

        let bogus = Ciphertext {
            c: Matrix::zero(2, 10),
            q: params.q.clone(),
        };
        assert!(decrypt(&bogus, &keys.secret).is_err());
    }

    #[test]
    fn generate_key_rejects_invalid_params() {
        let params = LweParams {
            n: 0,
            ..test_params()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let mut noise = NoiseSampler::with_seed(4, 14);
        assert!(generate_key(&params, &mut rng, &mut noise).is_err());
    }
}
