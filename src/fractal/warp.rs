//! Domain warping: displace the sample point by fBm before evaluating fBm.

use glam::{DVec2, DVec3};

use super::config::FbmParams;
use super::fbm::{fbm2, fbm3};
use crate::noise::{Noise2, Noise3};

/// Lattice-space offsets that decorrelate the displacement components.
pub const WARP_OFFSET_2D: DVec2 = DVec2::new(5.2, 1.3);
pub const WARP_OFFSET_3D: DVec3 = DVec3::new(5.2, 1.3, 2.8);

/// Converts a lattice-space offset into sample-space for `params`.
fn sample_space(offset: f64, params: &FbmParams) -> f64 {
    if params.frequency != 0.0 {
        offset / params.frequency
    } else {
        offset
    }
}

/// Displacement vector used by [`domain_warp2`]: one fBm sample per axis,
/// each taken at a different fixed offset.
pub fn warp_displacement2<N: Noise2 + ?Sized>(noise: &N, point: DVec2, params: &FbmParams) -> DVec2 {
    let offset = DVec2::new(
        sample_space(WARP_OFFSET_2D.x, params),
        sample_space(WARP_OFFSET_2D.y, params),
    );
    DVec2::new(fbm2(noise, point, params), fbm2(noise, point + offset, params))
}

/// Displacement vector used by [`domain_warp3`].
pub fn warp_displacement3<N: Noise3 + ?Sized>(noise: &N, point: DVec3, params: &FbmParams) -> DVec3 {
    let shift = |offset: f64| sample_space(offset, params);
    DVec3::new(
        fbm3(noise, point, params),
        fbm3(noise, point + DVec3::new(shift(WARP_OFFSET_3D.x), 0.0, 0.0), params),
        fbm3(
            noise,
            point + DVec3::new(shift(WARP_OFFSET_3D.y), shift(WARP_OFFSET_3D.z), 0.0),
            params,
        ),
    )
}

/// Evaluates fBm at `point + warp_strength * displacement(point)`.
///
/// The displacement is computed first, from the unwarped point; the warped
/// point is then fed to the same fBm. `warp_strength` is in sample-space
/// units.
pub fn domain_warp2<N: Noise2 + ?Sized>(
    noise: &N,
    point: DVec2,
    params: &FbmParams,
    warp_strength: f64,
) -> f64 {
    let displacement = warp_displacement2(noise, point, params);
    fbm2(noise, point + warp_strength * displacement, params)
}

/// 3D counterpart of [`domain_warp2`].
pub fn domain_warp3<N: Noise3 + ?Sized>(
    noise: &N,
    point: DVec3,
    params: &FbmParams,
    warp_strength: f64,
) -> f64 {
    let displacement = warp_displacement3(noise, point, params);
    fbm3(noise, point + warp_strength * displacement, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::Kernel;
    use crate::table::NoiseGenerator;

    #[test]
    fn test_zero_strength_is_plain_fbm() {
        let generator = NoiseGenerator::new(1337);
        let params = FbmParams::default();
        for kernel in Kernel::ALL {
            let sampler = kernel.bind(&generator);
            let p = DVec2::new(250.0, -80.0);
            assert_eq!(domain_warp2(&sampler, p, &params, 0.0), fbm2(&sampler, p, &params));
            let q = DVec3::new(250.0, -80.0, 33.0);
            assert_eq!(domain_warp3(&sampler, q, &params, 0.0), fbm3(&sampler, q, &params));
        }
    }

    #[test]
    fn test_warp_evaluates_displacement_first() {
        let generator = NoiseGenerator::new(9);
        let sampler = Kernel::Perlin.bind(&generator);
        let params = FbmParams::default();
        let p = DVec2::new(140.0, 260.0);
        let strength = 40.0;

        let displaced = p + strength * warp_displacement2(&sampler, p, &params);
        assert_eq!(domain_warp2(&sampler, p, &params, strength), fbm2(&sampler, displaced, &params));
    }

    #[test]
    fn test_displacement_components_differ() {
        let generator = NoiseGenerator::new(9);
        let sampler = Kernel::Simplex.bind(&generator);
        let d = warp_displacement2(&sampler, DVec2::new(17.0, 29.0), &FbmParams::default());
        assert_ne!(d.x, d.y);
    }

    #[test]
    fn test_warp_changes_field() {
        let generator = NoiseGenerator::new(2024);
        let sampler = Kernel::Simplex.bind(&generator);
        let params = FbmParams::default();
        let differing = (0..32)
            .map(|i| DVec2::new(i as f64 * 37.0, i as f64 * 11.0))
            .filter(|&p| domain_warp2(&sampler, p, &params, 50.0) != fbm2(&sampler, p, &params))
            .count();
        assert!(differing > 16, "warping should change most samples, changed {}", differing);
    }

    #[test]
    fn test_warp_is_deterministic() {
        let params = FbmParams::default();
        let a = NoiseGenerator::new(77);
        let b = NoiseGenerator::new(77);
        let p = DVec3::new(12.0, 34.0, 56.0);
        assert_eq!(
            domain_warp3(&Kernel::Perlin.bind(&a), p, &params, 25.0).to_bits(),
            domain_warp3(&Kernel::Perlin.bind(&b), p, &params, 25.0).to_bits()
        );
    }
}
