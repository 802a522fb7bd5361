//! LWE-based GSW encryption for single bits.
//!
//! A ciphertext is a matrix `C` with `s·C = μ·s·G + noise mod q`, where
//! `G` is the gadget matrix. Gates operate directly on that relation:
//! NOT subtracts from `G`, AND multiplies by the bit decomposition
//! `G⁻¹` of the other operand, and OR/NAND/XOR combine the two.
//!
//! # Key Types
//! - [`SecretKey`]: row vector `[1 | t]` with `t` uniform
//! - [`PublicKey`]: LWE sample matrix with `s·A` small
//! - [`Ciphertext`]: `(n+1) × N` matrix encrypting one bit
//!
//! # Correctness
//! Decryption recovers the bit while accumulated noise stays below
//! `2^{ℓ-2}`; each multiplicative gate grows noise by at most a factor of
//! `N + 1`. With the default parameters that allows chains of several
//! hundred gates.

mod enc;
mod gadget;
mod gates;
mod types;

pub use enc::{decrypt, encrypt, generate_key};
pub use gadget::{gadget_inverse, gadget_matrix};
pub use gates::{and, nand, not, or, xor};
pub use types::{Ciphertext, KeyPair, PublicKey, SecretKey};
