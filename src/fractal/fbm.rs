//! Normalized fractal Brownian motion over any kernel.

use glam::{DVec2, DVec3};

use super::config::FbmParams;
use crate::noise::{Noise2, Noise3};

/// Sums `params.octaves` octaves of `noise` at `point` and divides by the
/// amplitude sum, keeping the result near `[-1, 1]`.
///
/// Returns `NaN` when `params.octaves == 0`.
pub fn fbm2<N: Noise2 + ?Sized>(noise: &N, point: DVec2, params: &FbmParams) -> f64 {
    let mut sum = 0.0;
    let mut norm = 0.0;
    for octave in params.octave_iter() {
        sum += octave.amplitude * noise.sample2(point, octave.frequency);
        norm += octave.amplitude;
    }
    sum / norm
}

/// 3D counterpart of [`fbm2`].
pub fn fbm3<N: Noise3 + ?Sized>(noise: &N, point: DVec3, params: &FbmParams) -> f64 {
    let mut sum = 0.0;
    let mut norm = 0.0;
    for octave in params.octave_iter() {
        sum += octave.amplitude * noise.sample3(point, octave.frequency);
        norm += octave.amplitude;
    }
    sum / norm
}
