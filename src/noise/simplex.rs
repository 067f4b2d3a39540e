//! Simplex noise in two and three dimensions.
//!
//! Input space is skewed so that simplices map onto the unit grid, the cell
//! is found with a floor, and the offsets inside the cell are unskewed back.
//! Each simplex corner then contributes a radially attenuated gradient dot.

use super::math::wrap_cell;
use crate::table::{grad2_dot, grad3_dot, NoiseGenerator};

/// Skew factor for 2D: `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor for 2D: `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// Skew factor for 3D.
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3D.
const G3: f64 = 1.0 / 6.0;

/// Squared influence radius of a 2D corner.
const RADIUS2_2D: f64 = 0.5;
/// Squared influence radius of a 3D corner.
const RADIUS2_3D: f64 = 0.6;

/// Output scale bringing 2D simplex noise close to `[-1, 1]`.
pub const SIMPLEX2_SCALE: f64 = 70.0;
/// Output scale bringing 3D simplex noise close to `[-1, 1]`.
pub const SIMPLEX3_SCALE: f64 = 32.0;

/// Lattice offsets of the second and third corners of a 3D simplex.
///
/// The first corner is always `(0, 0, 0)` and the last `(1, 1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimplexOffsets {
    pub i1: usize,
    pub j1: usize,
    pub k1: usize,
    pub i2: usize,
    pub j2: usize,
    pub k2: usize,
}

impl SimplexOffsets {
    const fn new(i1: usize, j1: usize, k1: usize, i2: usize, j2: usize, k2: usize) -> Self {
        Self { i1, j1, k1, i2, j2, k2 }
    }

    /// Returns `(i1, j1, k1, i2, j2, k2)`.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize, usize, usize) {
        (self.i1, self.j1, self.k1, self.i2, self.j2, self.k2)
    }
}

/// Picks the middle corner of the 2D simplex containing offset `(x0, y0)`.
///
/// Ties go to the lower triangle.
#[inline]
pub fn rank2(x0: f64, y0: f64) -> (usize, usize) {
    if x0 >= y0 {
        (1, 0)
    } else {
        (0, 1)
    }
}

/// Ranks the unskewed offset `(x0, y0, z0)` and returns the two intermediate
/// corners of the tetrahedron it falls in.
///
/// The step towards the largest component is taken first, then towards the
/// second largest. Ties are broken with `>=`, favouring x over y over z.
#[inline]
pub fn rank3(x0: f64, y0: f64, z0: f64) -> SimplexOffsets {
    if x0 >= y0 {
        if y0 >= z0 {
            // x y z
            SimplexOffsets::new(1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            // x z y
            SimplexOffsets::new(1, 0, 0, 1, 0, 1)
        } else {
            // z x y
            SimplexOffsets::new(0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        // z y x
        SimplexOffsets::new(0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        // y z x
        SimplexOffsets::new(0, 1, 0, 0, 1, 1)
    } else {
        // y x z
        SimplexOffsets::new(0, 1, 0, 1, 1, 0)
    }
}

#[inline(always)]
fn corner2(hash: usize, x: f64, y: f64) -> f64 {
    let t = RADIUS2_2D - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * grad2_dot(hash, x, y)
    }
}

#[inline(always)]
fn corner3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let t = RADIUS2_3D - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * grad3_dot(hash, x, y, z)
    }
}

impl NoiseGenerator {
    /// Samples 2D simplex noise at `(x, y) * frequency`.
    pub fn simplex2(&self, x: f64, y: f64, frequency: f64) -> f64 {
        let x = x * frequency;
        let y = y * frequency;

        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = rank2(x0, y0);

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = wrap_cell(i);
        let jj = wrap_cell(j);
        let p = self.permutation();
        let g0 = p.get(ii + p.get(jj));
        let g1 = p.get(ii + i1 + p.get(jj + j1));
        let g2 = p.get(ii + 1 + p.get(jj + 1));

        SIMPLEX2_SCALE * (corner2(g0, x0, y0) + corner2(g1, x1, y1) + corner2(g2, x2, y2))
    }

    /// Samples 3D simplex noise at `(x, y, z) * frequency`.
    pub fn simplex3(&self, x: f64, y: f64, z: f64, frequency: f64) -> f64 {
        let x = x * frequency;
        let y = y * frequency;
        let z = z * frequency;

        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let o = rank3(x0, y0, z0);

        let x1 = x0 - o.i1 as f64 + G3;
        let y1 = y0 - o.j1 as f64 + G3;
        let z1 = z0 - o.k1 as f64 + G3;
        let x2 = x0 - o.i2 as f64 + 2.0 * G3;
        let y2 = y0 - o.j2 as f64 + 2.0 * G3;
        let z2 = z0 - o.k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap_cell(i);
        let jj = wrap_cell(j);
        let kk = wrap_cell(k);
        let p = self.permutation();
        let hash = |di: usize, dj: usize, dk: usize| {
            p.get(ii + di + p.get(jj + dj + p.get(kk + dk)))
        };

        let n0 = corner3(hash(0, 0, 0), x0, y0, z0);
        let n1 = corner3(hash(o.i1, o.j1, o.k1), x1, y1, z1);
        let n2 = corner3(hash(o.i2, o.j2, o.k2), x2, y2, z2);
        let n3 = corner3(hash(1, 1, 1), x3, y3, z3);

        SIMPLEX3_SCALE * (n0 + n1 + n2 + n3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Expected offsets derived independently: step along the largest
    /// component first, then the second largest.
    fn expected_offsets(x0: f64, y0: f64, z0: f64) -> (usize, usize, usize, usize, usize, usize) {
        let mut axes = [(x0, 0usize), (y0, 1), (z0, 2)];
        axes.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap());
        let mut first = [0usize; 3];
        let mut second = [0usize; 3];
        first[axes[0].1] = 1;
        second[axes[0].1] = 1;
        second[axes[1].1] = 1;
        (first[0], first[1], first[2], second[0], second[1], second[2])
    }

    #[test]
    fn test_rank3_covers_all_orderings() {
        let steps = 12;
        let mut seen: HashMap<(usize, usize, usize, usize, usize, usize), usize> = HashMap::new();

        for a in 0..steps {
            for b in 0..steps {
                for c in 0..steps {
                    // Offsets on distinct sub-grids so no two components tie.
                    let x0 = (a as f64 + 0.1) / steps as f64;
                    let y0 = (b as f64 + 0.4) / steps as f64;
                    let z0 = (c as f64 + 0.7) / steps as f64;

                    let got = rank3(x0, y0, z0).as_tuple();
                    assert_eq!(got, expected_offsets(x0, y0, z0), "at ({}, {}, {})", x0, y0, z0);
                    *seen.entry(got).or_default() += 1;
                }
            }
        }

        assert_eq!(seen.len(), 6, "every ordering must be exercised: {:?}", seen.keys());
    }

    #[test]
    fn test_rank3_documented_tuples() {
        assert_eq!(rank3(0.9, 0.5, 0.1).as_tuple(), (1, 0, 0, 1, 1, 0));
        assert_eq!(rank3(0.9, 0.1, 0.5).as_tuple(), (1, 0, 0, 1, 0, 1));
        assert_eq!(rank3(0.5, 0.1, 0.9).as_tuple(), (0, 0, 1, 1, 0, 1));
        assert_eq!(rank3(0.1, 0.5, 0.9).as_tuple(), (0, 0, 1, 0, 1, 1));
        assert_eq!(rank3(0.1, 0.9, 0.5).as_tuple(), (0, 1, 0, 0, 1, 1));
        assert_eq!(rank3(0.5, 0.9, 0.1).as_tuple(), (0, 1, 0, 1, 1, 0));
    }

    #[test]
    fn test_rank_ties() {
        assert_eq!(rank2(0.5, 0.5), (1, 0));
        assert_eq!(rank3(0.5, 0.5, 0.5).as_tuple(), (1, 0, 0, 1, 1, 0));
        assert_eq!(rank3(0.3, 0.3, 0.6).as_tuple(), (0, 0, 1, 1, 0, 1));
        assert_eq!(rank3(0.6, 0.2, 0.6).as_tuple(), (1, 0, 0, 1, 0, 1));
    }

    #[test]
    fn test_origin_is_zero() {
        let generator = NoiseGenerator::new(1337);
        assert_eq!(generator.simplex2(0.0, 0.0, 1.0), 0.0);
        assert_eq!(generator.simplex3(0.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = NoiseGenerator::new(42);
        let b = NoiseGenerator::new(42);
        for i in 0..20 {
            let x = i as f64 * 13.7;
            let z = i as f64 * 7.3;
            assert_eq!(a.simplex2(x, z, 0.05).to_bits(), b.simplex2(x, z, 0.05).to_bits());
            assert_eq!(
                a.simplex3(x, z, x - z, 0.05).to_bits(),
                b.simplex3(x, z, x - z, 0.05).to_bits()
            );
        }
    }

    #[test]
    fn test_simplex2_continuity() {
        let generator = NoiseGenerator::new(8);
        let eps = 1e-7;
        for i in 0..2_000 {
            let x = i as f64 * 0.173 - 150.0;
            let y = i as f64 * 0.041 + 3.0;
            let a = generator.simplex2(x, y, 1.0);
            let b = generator.simplex2(x + eps, y, 1.0);
            assert!((a - b).abs() < 1e-4, "jump at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_spatial_variation() {
        let generator = NoiseGenerator::new(0);
        let values: Vec<f64> = (0..40)
            .map(|i| generator.simplex2(i as f64 * 5.0, i as f64 * 3.0, 0.1))
            .collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.1, "2D simplex should vary");
    }
}
