//! Lattice noise kernels.
//!
//! - [`Kernel::Perlin`] - gradient noise on the square/cubic lattice
//! - [`Kernel::Simplex`] - gradient noise on the skewed simplex grid
//! - [`Kernel::Value`] - hashed corner values, with analytic derivatives
//!
//! Kernels are exposed both as methods on [`NoiseGenerator`] and through the
//! [`Noise2`]/[`Noise3`] traits so that the fractal layer can be written once.

mod math;
mod perlin;
mod simplex;
mod value;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::table::NoiseGenerator;

pub use math::{fade, fade_derivative, fract, lerp, smoothstep_with_derivative};
pub(crate) use math::{lattice, wrap_cell};
pub use perlin::PERLIN_SCALE;
pub use simplex::{rank2, rank3, SimplexOffsets, SIMPLEX2_SCALE, SIMPLEX3_SCALE};
pub use value::{noised2, noised3, ValueNoise};

/// A 2D scalar field sampled at `point * frequency`.
pub trait Noise2 {
    fn sample2(&self, point: DVec2, frequency: f64) -> f64;
}

/// A 3D scalar field sampled at `point * frequency`.
pub trait Noise3 {
    fn sample3(&self, point: DVec3, frequency: f64) -> f64;
}

/// A 2D field that also reports its exact gradient.
pub trait NoiseDerivative2: Noise2 {
    /// Returns the value and its gradient with respect to `point`
    /// (the frequency factor is already applied to the gradient).
    fn sample2_with_derivative(&self, point: DVec2, frequency: f64) -> (f64, DVec2);
}

/// A 3D field that also reports its exact gradient.
pub trait NoiseDerivative3: Noise3 {
    fn sample3_with_derivative(&self, point: DVec3, frequency: f64) -> (f64, DVec3);
}

/// The closed set of base kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    Perlin,
    Simplex,
    Value,
}

impl Kernel {
    /// All kernels, in declaration order.
    pub const ALL: [Kernel; 3] = [Kernel::Perlin, Kernel::Simplex, Kernel::Value];

    /// Returns the name of the kernel.
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Perlin => "perlin",
            Kernel::Simplex => "simplex",
            Kernel::Value => "value",
        }
    }

    /// Pairs the kernel with a generator's permutation table.
    pub fn bind(self, generator: &NoiseGenerator) -> KernelSampler<'_> {
        KernelSampler {
            generator,
            kernel: self,
        }
    }
}

/// A kernel bound to a generator, usable wherever a [`Noise2`] or [`Noise3`]
/// is expected.
#[derive(Debug, Clone, Copy)]
pub struct KernelSampler<'a> {
    generator: &'a NoiseGenerator,
    kernel: Kernel,
}

impl KernelSampler<'_> {
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }
}

impl Noise2 for KernelSampler<'_> {
    #[inline]
    fn sample2(&self, point: DVec2, frequency: f64) -> f64 {
        match self.kernel {
            Kernel::Perlin => self.generator.perlin2(point.x, point.y, frequency),
            Kernel::Simplex => self.generator.simplex2(point.x, point.y, frequency),
            Kernel::Value => ValueNoise.sample2(point, frequency),
        }
    }
}

impl Noise3 for KernelSampler<'_> {
    #[inline]
    fn sample3(&self, point: DVec3, frequency: f64) -> f64 {
        match self.kernel {
            Kernel::Perlin => self.generator.perlin3(point.x, point.y, point.z, frequency),
            Kernel::Simplex => self.generator.simplex3(point.x, point.y, point.z, frequency),
            Kernel::Value => ValueNoise.sample3(point, frequency),
        }
    }
}
