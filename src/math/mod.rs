//! Mathematical kernel for the GSW scheme.
//!
//! Provides the arithmetic everything else rests on:
//!
//! - **Big-integer matrices** over Z_q with modular algebra and row-level
//!   parallelism
//! - **Signed/centred conversions** between the storage range `[0, q)` and
//!   the centred range `(-q/2, q/2]`
//! - **Sampling**: uniform big integers below a bound, and small signed
//!   noise terms

pub mod matrix;
pub mod modular;
pub mod sampling;

pub use matrix::Matrix;
pub use sampling::{NoiseSampler, RandomSource};
