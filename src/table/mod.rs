//! Permutation table construction and the caller-owned noise generator.
//!
//! Every lattice kernel hashes integer coordinates through a 512-entry
//! permutation table. The table is built from a 32-bit linear congruential
//! generator and owned by a [`NoiseGenerator`], so independent generators can
//! coexist and be shared read-only across threads.

mod generator;
mod gradients;
mod lcg;
mod permutation;

pub use generator::{NoiseGenerator, DEFAULT_SEED};
pub use gradients::{GRADIENTS_2D, GRADIENTS_3D};
pub(crate) use gradients::{grad2_dot, grad3_dot};
pub use lcg::Lcg;
pub use permutation::{PermutationTable, TABLE_SIZE};
