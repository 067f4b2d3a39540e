//! Value noise with analytic derivatives.
//!
//! Corner values come from a cheap arithmetic hash of the lattice coordinates
//! rather than the permutation table, so this kernel is independent of the
//! generator seed. The interpolant is written in the polynomial form
//! `k0 + k1 u + k2 v + k4 u v (+ ...)`, which makes its partial derivatives a
//! direct product-rule expansion.

use glam::{DVec2, DVec3, DVec4};

use super::math::{fade, fade_derivative, fract};
use super::{Noise2, Noise3, NoiseDerivative2, NoiseDerivative3};
use crate::table::NoiseGenerator;

const INV_PI: f64 = 0.318_309_9;

/// Lattice strides for the 3D corner hash.
const STRIDE_Y: f64 = 317.0;
const STRIDE_Z: f64 = 157.0;

/// Hash of a 2D lattice corner into `[0, 1)`.
#[inline(always)]
fn hash_corner2(p: DVec2) -> f64 {
    let qx = 50.0 * fract(p.x * INV_PI);
    let qy = 50.0 * fract(p.y * INV_PI);
    fract(qx * qy * (qx + qy))
}

/// Hash of a linearised 3D lattice index into `[0, 1)`.
#[inline(always)]
fn hash_index(n: f64) -> f64 {
    fract(n * 17.0 * fract(n * INV_PI))
}

/// 2D value noise at `x` (no frequency scaling), packed as
/// `(value, d/dx, d/dy)`. The value lies in `[-1, 1]`.
pub fn noised2(x: DVec2) -> DVec3 {
    let p = x.floor();
    let w = x - p;

    let u = DVec2::new(fade(w.x), fade(w.y));
    let du = DVec2::new(fade_derivative(w.x), fade_derivative(w.y));

    let a = hash_corner2(p);
    let b = hash_corner2(p + DVec2::new(1.0, 0.0));
    let c = hash_corner2(p + DVec2::new(0.0, 1.0));
    let d = hash_corner2(p + DVec2::new(1.0, 1.0));

    let k0 = a;
    let k1 = b - a;
    let k2 = c - a;
    let k4 = a - b - c + d;

    let value = -1.0 + 2.0 * (k0 + k1 * u.x + k2 * u.y + k4 * u.x * u.y);
    let dx = 2.0 * du.x * (k1 + k4 * u.y);
    let dy = 2.0 * du.y * (k2 + k4 * u.x);

    DVec3::new(value, dx, dy)
}

/// 3D value noise at `x`, packed as `(value, d/dx, d/dy, d/dz)`.
pub fn noised3(x: DVec3) -> DVec4 {
    let p = x.floor();
    let w = x - p;

    let u = DVec3::new(fade(w.x), fade(w.y), fade(w.z));
    let du = DVec3::new(
        fade_derivative(w.x),
        fade_derivative(w.y),
        fade_derivative(w.z),
    );

    let n = p.x + STRIDE_Y * p.y + STRIDE_Z * p.z;

    let a = hash_index(n);
    let b = hash_index(n + 1.0);
    let c = hash_index(n + STRIDE_Y);
    let d = hash_index(n + STRIDE_Y + 1.0);
    let e = hash_index(n + STRIDE_Z);
    let f = hash_index(n + STRIDE_Z + 1.0);
    let g = hash_index(n + STRIDE_Y + STRIDE_Z);
    let h = hash_index(n + STRIDE_Y + STRIDE_Z + 1.0);

    let k0 = a;
    let k1 = b - a;
    let k2 = c - a;
    let k3 = e - a;
    let k4 = a - b - c + d;
    let k5 = a - c - e + g;
    let k6 = a - b - e + f;
    let k7 = -a + b + c - d + e - f - g + h;

    let value = -1.0
        + 2.0
            * (k0
                + k1 * u.x
                + k2 * u.y
                + k3 * u.z
                + k4 * u.x * u.y
                + k5 * u.y * u.z
                + k6 * u.z * u.x
                + k7 * u.x * u.y * u.z);

    let dx = 2.0 * du.x * (k1 + k4 * u.y + k6 * u.z + k7 * u.y * u.z);
    let dy = 2.0 * du.y * (k2 + k5 * u.z + k4 * u.x + k7 * u.z * u.x);
    let dz = 2.0 * du.z * (k3 + k6 * u.x + k5 * u.y + k7 * u.x * u.y);

    DVec4::new(value, dx, dy, dz)
}

/// Table-free value noise kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueNoise;

impl Noise2 for ValueNoise {
    #[inline]
    fn sample2(&self, point: DVec2, frequency: f64) -> f64 {
        noised2(point * frequency).x
    }
}

impl Noise3 for ValueNoise {
    #[inline]
    fn sample3(&self, point: DVec3, frequency: f64) -> f64 {
        noised3(point * frequency).x
    }
}

impl NoiseDerivative2 for ValueNoise {
    #[inline]
    fn sample2_with_derivative(&self, point: DVec2, frequency: f64) -> (f64, DVec2) {
        let n = noised2(point * frequency);
        (n.x, DVec2::new(n.y, n.z) * frequency)
    }
}

impl NoiseDerivative3 for ValueNoise {
    #[inline]
    fn sample3_with_derivative(&self, point: DVec3, frequency: f64) -> (f64, DVec3) {
        let n = noised3(point * frequency);
        (n.x, DVec3::new(n.y, n.z, n.w) * frequency)
    }
}

impl NoiseGenerator {
    /// Samples 2D value noise at `(x, y) * frequency`.
    ///
    /// Value noise does not read the permutation table; the method exists so
    /// every kernel is reachable from a generator.
    pub fn value2(&self, x: f64, y: f64, frequency: f64) -> f64 {
        ValueNoise.sample2(DVec2::new(x, y), frequency)
    }

    /// Samples 3D value noise at `(x, y, z) * frequency`.
    pub fn value3(&self, x: f64, y: f64, z: f64, frequency: f64) -> f64 {
        ValueNoise.sample3(DVec3::new(x, y, z), frequency)
    }
}
