//! Improved Perlin gradient noise in two and three dimensions.

use std::f64::consts::FRAC_1_SQRT_2;

use super::math::{fade, lattice, lerp};
use crate::table::{grad2_dot, grad3_dot, NoiseGenerator};

/// Output scale bringing Perlin noise close to `[-1, 1]`.
///
/// The bound is approximate; small overshoot is possible and is not clamped.
pub const PERLIN_SCALE: f64 = FRAC_1_SQRT_2;

impl NoiseGenerator {
    /// Samples 2D Perlin noise at `(x, y) * frequency`.
    pub fn perlin2(&self, x: f64, y: f64, frequency: f64) -> f64 {
        let (xi, xf) = lattice(x * frequency);
        let (yi, yf) = lattice(y * frequency);
        let u = fade(xf);
        let v = fade(yf);

        let p = self.permutation();
        let aa = p.get(xi + p.get(yi));
        let ab = p.get(xi + p.get(yi + 1));
        let ba = p.get(xi + 1 + p.get(yi));
        let bb = p.get(xi + 1 + p.get(yi + 1));

        let x1 = lerp(grad2_dot(aa, xf, yf), grad2_dot(ba, xf - 1.0, yf), u);
        let x2 = lerp(
            grad2_dot(ab, xf, yf - 1.0),
            grad2_dot(bb, xf - 1.0, yf - 1.0),
            u,
        );

        lerp(x1, x2, v) * PERLIN_SCALE
    }

    /// Samples 3D Perlin noise at `(x, y, z) * frequency`.
    pub fn perlin3(&self, x: f64, y: f64, z: f64, frequency: f64) -> f64 {
        let (xi, xf) = lattice(x * frequency);
        let (yi, yf) = lattice(y * frequency);
        let (zi, zf) = lattice(z * frequency);
        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let p = self.permutation();
        let hash = |dx: usize, dy: usize, dz: usize| {
            p.get(xi + dx + p.get(yi + dy + p.get(zi + dz)))
        };

        let near = {
            let x1 = lerp(
                grad3_dot(hash(0, 0, 0), xf, yf, zf),
                grad3_dot(hash(1, 0, 0), xf - 1.0, yf, zf),
                u,
            );
            let x2 = lerp(
                grad3_dot(hash(0, 1, 0), xf, yf - 1.0, zf),
                grad3_dot(hash(1, 1, 0), xf - 1.0, yf - 1.0, zf),
                u,
            );
            lerp(x1, x2, v)
        };

        let far = {
            let x1 = lerp(
                grad3_dot(hash(0, 0, 1), xf, yf, zf - 1.0),
                grad3_dot(hash(1, 0, 1), xf - 1.0, yf, zf - 1.0),
                u,
            );
            let x2 = lerp(
                grad3_dot(hash(0, 1, 1), xf, yf - 1.0, zf - 1.0),
                grad3_dot(hash(1, 1, 1), xf - 1.0, yf - 1.0, zf - 1.0),
                u,
            );
            lerp(x1, x2, v)
        };

        lerp(near, far, w) * PERLIN_SCALE
    }
}
