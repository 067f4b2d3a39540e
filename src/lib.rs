//! Seedable procedural noise.
//!
//! This crate provides Perlin, simplex and value noise in two and three
//! dimensions, fractal composition (fBm, rotated fBm, domain warping),
//! value noise with analytic derivatives, and a terrain sampler whose
//! normals are the exact gradient of its height field.
//!
//! All sampling goes through a caller-owned [`NoiseGenerator`], which holds
//! the permutation table built from a seed.

pub mod table;
pub mod noise;
pub mod fractal;
pub mod terrain;
pub mod render;
pub mod export;

pub use table::{NoiseGenerator, DEFAULT_SEED};
pub use noise::{Kernel, KernelSampler, Noise2, Noise3, NoiseDerivative2, NoiseDerivative3, ValueNoise};
pub use fractal::{DerivativeFbm, FbmParams};
pub use terrain::{terrain_height_and_normal, Heightmap, TerrainConfig, TerrainSampler};
pub use render::{RenderConfig, RenderMode};
