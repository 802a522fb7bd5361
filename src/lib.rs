//! Bit-level fully homomorphic encryption from LWE, in the GSW style.
//!
//! A caller generates a key pair, encrypts single bits, evaluates boolean
//! circuits (NOT, AND, OR, NAND, XOR) on the ciphertexts, and decrypts the
//! result, which matches what the circuit would have produced on the
//! plaintexts provided accumulated noise stays below the recovery
//! threshold.
//!
//! Key components:
//! - Modular big-integer matrix algebra over Z_q, including the
//!   bit-decomposition operator G⁻¹ used by the homomorphic gates
//! - LWE/GSW core: key generation, encryption, decryption, and the gate
//!   algebra
//!
//! The default parameters are toy-sized for pedagogy; this is not a
//! production cryptosystem.
//!
//! # Example
//!
//! ```
//! use gsw_fhe::{and, decrypt, encrypt, generate_key, LweParams, NoiseSampler};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let params = LweParams::default();
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let mut noise = NoiseSampler::with_seed(params.noise_bound, 2);
//!
//! let keys = generate_key(&params, &mut rng, &mut noise).unwrap();
//! let c1 = encrypt(true, &keys.public, &mut rng).unwrap();
//! let c2 = encrypt(false, &keys.public, &mut rng).unwrap();
//! let product = and(&c1, &c2, &keys.public).unwrap();
//! assert!(!decrypt(&product, &keys.secret).unwrap());
//! ```

pub mod error;
pub mod lwe;
pub mod math;
pub mod params;

pub use error::{Error, Result};
pub use lwe::{
    and, decrypt, encrypt, generate_key, nand, not, or, xor, Ciphertext, KeyPair, PublicKey,
    SecretKey,
};
pub use math::{Matrix, NoiseSampler, RandomSource};
pub use params::LweParams;
