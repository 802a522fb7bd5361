//! Signed and centred conversions for residues in Z_q.
//!
//! Storage always uses the non-negative representative in `[0, q)`;
//! decryption reads the centred representative in `(-q/2, q/2]`. These two
//! conventions cross exactly here.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Bit length ⌈log₂ q⌉ for q >= 2.
///
/// Exact for powers of two: `bit_len(2^30) == 30`.
pub fn bit_len(q: &BigUint) -> usize {
    (q - 1u32).bits().max(1) as usize
}

/// Maps a signed integer to its representative in `[0, q)`.
pub fn from_signed(value: i64, q: &BigUint) -> BigUint {
    if value >= 0 {
        BigUint::from(value as u64) % q
    } else {
        let abs = BigUint::from(value.unsigned_abs()) % q;
        if abs.is_zero() {
            BigUint::zero()
        } else {
            q - abs
        }
    }
}

/// Maps a residue in `[0, q)` to the centred representative in
/// `(-q/2, q/2]`.
pub fn to_centered(value: &BigUint, q: &BigUint) -> BigInt {
    let half = q >> 1;
    if value <= &half {
        BigInt::from(value.clone())
    } else {
        BigInt::from(value.clone()) - BigInt::from(q.clone())
    }
}
