//! Rotated fBm that carries analytic gradients through every octave.
//!
//! Octave `k` samples the kernel at `(L R)^k p`. Its gradient with respect to
//! `p` is `((L R)^k)^T` applied to the kernel gradient, so an orientation
//! matrix `(L R^T)^k` is accumulated alongside the point and used to bring
//! each octave's gradient back into the input frame before summation.

use glam::{DMat2, DMat3, DVec2, DVec3, DVec4};

use super::config::DerivativeFbm;
use crate::noise::{Noise2, Noise3, NoiseDerivative2, NoiseDerivative3};

/// Unnormalized rotated fBm with gradient, packed as `(value, d/dx, d/dy)`.
pub fn fbmd2<N: NoiseDerivative2 + ?Sized>(
    noise: &N,
    point: DVec2,
    params: &DerivativeFbm,
    rotation: DMat2,
) -> DVec3 {
    let back_rotation = rotation.transpose();
    let mut p = point;
    let mut value = 0.0;
    let mut gradient = DVec2::ZERO;
    let mut amplitude = params.amplitude;
    let mut orientation = DMat2::IDENTITY;

    for _ in 0..params.octaves {
        let (n, d) = noise.sample2_with_derivative(p, 1.0);
        value += amplitude * n;
        gradient += amplitude * (orientation * d);
        amplitude *= params.gain;
        p = (rotation * p) * params.lacunarity;
        orientation = (back_rotation * orientation) * params.lacunarity;
    }

    DVec3::new(value, gradient.x, gradient.y)
}

/// 3D counterpart of [`fbmd2`], packed as `(value, d/dx, d/dy, d/dz)`.
pub fn fbmd3<N: NoiseDerivative3 + ?Sized>(
    noise: &N,
    point: DVec3,
    params: &DerivativeFbm,
    rotation: DMat3,
) -> DVec4 {
    let back_rotation = rotation.transpose();
    let mut p = point;
    let mut value = 0.0;
    let mut gradient = DVec3::ZERO;
    let mut amplitude = params.amplitude;
    let mut orientation = DMat3::IDENTITY;

    for _ in 0..params.octaves {
        let (n, d) = noise.sample3_with_derivative(p, 1.0);
        value += amplitude * n;
        gradient += amplitude * (orientation * d);
        amplitude *= params.gain;
        p = (rotation * p) * params.lacunarity;
        orientation = (back_rotation * orientation) * params.lacunarity;
    }

    DVec4::new(value, gradient.x, gradient.y, gradient.z)
}

/// Value-only form of [`fbmd2`]. Produces the same value without tracking
/// gradients.
pub fn fbm2_raw<N: Noise2 + ?Sized>(
    noise: &N,
    point: DVec2,
    params: &DerivativeFbm,
    rotation: DMat2,
) -> f64 {
    let mut p = point;
    let mut value = 0.0;
    let mut amplitude = params.amplitude;

    for _ in 0..params.octaves {
        value += amplitude * noise.sample2(p, 1.0);
        amplitude *= params.gain;
        p = (rotation * p) * params.lacunarity;
    }

    value
}

/// Value-only form of [`fbmd3`].
pub fn fbm3_raw<N: Noise3 + ?Sized>(
    noise: &N,
    point: DVec3,
    params: &DerivativeFbm,
    rotation: DMat3,
) -> f64 {
    let mut p = point;
    let mut value = 0.0;
    let mut amplitude = params.amplitude;

    for _ in 0..params.octaves {
        value += amplitude * noise.sample3(p, 1.0);
        amplitude *= params.gain;
        p = (rotation * p) * params.lacunarity;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::{ROTATION_2D, ROTATION_3D};
    use crate::noise::ValueNoise;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const H: f64 = 1e-6;

    fn check(analytic: f64, numeric: f64, scale: f64) {
        assert!(
            (analytic - numeric).abs() <= 1e-4 * scale.max(1.0),
            "analytic {} vs numeric {}",
            analytic,
            numeric
        );
    }

    #[test]
    fn test_fbmd2_gradient_matches_finite_difference() {
        let params = DerivativeFbm::terrain_2d();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..200 {
            let p = DVec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let n = fbmd2(&ValueNoise, p, &params, ROTATION_2D);
            let value = |q: DVec2| fbmd2(&ValueNoise, q, &params, ROTATION_2D).x;
            let ddx = (value(p + DVec2::X * H) - value(p - DVec2::X * H)) / (2.0 * H);
            let ddy = (value(p + DVec2::Y * H) - value(p - DVec2::Y * H)) / (2.0 * H);
            let scale = n.y.abs().max(n.z.abs());
            check(n.y, ddx, scale);
            check(n.z, ddy, scale);
        }
    }

    #[test]
    fn test_fbmd3_gradient_matches_finite_difference() {
        let params = DerivativeFbm::detail_3d();
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..200 {
            let p = DVec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let n = fbmd3(&ValueNoise, p, &params, ROTATION_3D);
            let value = |q: DVec3| fbmd3(&ValueNoise, q, &params, ROTATION_3D).x;
            let central = |axis: DVec3| (value(p + axis * H) - value(p - axis * H)) / (2.0 * H);
            let scale = n.y.abs().max(n.z.abs()).max(n.w.abs());
            check(n.y, central(DVec3::X), scale);
            check(n.z, central(DVec3::Y), scale);
            check(n.w, central(DVec3::Z), scale);
        }
    }

    #[test]
    fn test_non_orthonormal_matrix_keeps_exact_gradient() {
        let skew = DMat2::from_cols(DVec2::new(1.1, 0.3), DVec2::new(-0.2, 0.9));
        let params = DerivativeFbm::coarse_2d();
        let p = DVec2::new(0.37, -1.42);
        let n = fbmd2(&ValueNoise, p, &params, skew);
        let value = |q: DVec2| fbmd2(&ValueNoise, q, &params, skew).x;
        let ddx = (value(p + DVec2::X * H) - value(p - DVec2::X * H)) / (2.0 * H);
        check(n.y, ddx, n.y.abs());
    }

    #[test]
    fn test_raw_value_matches_derivative_value() {
        let params = DerivativeFbm::terrain_2d();
        let p = DVec2::new(1.25, -3.5);
        assert_eq!(
            fbm2_raw(&ValueNoise, p, &params, ROTATION_2D),
            fbmd2(&ValueNoise, p, &params, ROTATION_2D).x
        );

        let params = DerivativeFbm::detail_3d();
        let q = DVec3::new(1.25, -3.5, 0.75);
        assert_eq!(
            fbm3_raw(&ValueNoise, q, &params, ROTATION_3D),
            fbmd3(&ValueNoise, q, &params, ROTATION_3D).x
        );
    }

    #[test]
    fn test_single_octave_is_scaled_kernel() {
        let params = DerivativeFbm {
            octaves: 1,
            ..DerivativeFbm::terrain_2d()
        };
        let p = DVec2::new(2.2, 7.9);
        let (n, d) = ValueNoise.sample2_with_derivative(p, 1.0);
        let packed = fbmd2(&ValueNoise, p, &params, ROTATION_2D);
        assert_eq!(packed, DVec3::new(0.5 * n, 0.5 * d.x, 0.5 * d.y));
    }
}
