//! Rotated fBm: the sample point is rotated between octaves so lattice
//! artifacts do not line up across scales.

use glam::{DMat2, DMat3, DVec2, DVec3};

use super::config::FbmParams;
use crate::noise::{Noise2, Noise3};

/// Orthonormal 2D rotation (about 36.87 degrees). Columns `(0.8, -0.6)` and
/// `(0.6, 0.8)`.
pub const ROTATION_2D: DMat2 = DMat2::from_cols(DVec2::new(0.8, -0.6), DVec2::new(0.6, 0.8));

/// Orthonormal 3D rotation.
pub const ROTATION_3D: DMat3 = DMat3::from_cols(
    DVec3::new(0.00, 0.80, 0.60),
    DVec3::new(-0.80, 0.36, -0.48),
    DVec3::new(-0.60, -0.48, 0.64),
);

/// Normalized fBm where the point, pre-scaled by `params.frequency`, is
/// sampled at frequency 1, then rotated by `rotation` and scaled by
/// `params.lacunarity` for the next octave.
///
/// The matrix is used as given; a singular matrix collapses later octaves
/// onto a line but still yields a defined value.
pub fn fbm2_rotated<N: Noise2 + ?Sized>(
    noise: &N,
    point: DVec2,
    params: &FbmParams,
    rotation: DMat2,
) -> f64 {
    let mut p = point * params.frequency;
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amplitude = 1.0;

    for _ in 0..params.octaves {
        sum += amplitude * noise.sample2(p, 1.0);
        norm += amplitude;
        p = (rotation * p) * params.lacunarity;
        amplitude *= params.gain;
    }

    sum / norm
}

/// 3D counterpart of [`fbm2_rotated`].
pub fn fbm3_rotated<N: Noise3 + ?Sized>(
    noise: &N,
    point: DVec3,
    params: &FbmParams,
    rotation: DMat3,
) -> f64 {
    let mut p = point * params.frequency;
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amplitude = 1.0;

    for _ in 0..params.octaves {
        sum += amplitude * noise.sample3(p, 1.0);
        norm += amplitude;
        p = (rotation * p) * params.lacunarity;
        amplitude *= params.gain;
    }

    sum / norm
}
