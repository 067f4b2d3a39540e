//! Rendering a configured noise field into a [`Heightmap`].

mod config;

pub use config::{ConfigError, RenderConfig, RenderMode};

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::fractal::{
    domain_warp2, domain_warp3, fbm2, fbm2_rotated, fbm3, fbm3_rotated, ROTATION_2D, ROTATION_3D,
};
use crate::noise::{KernelSampler, Noise2, Noise3};
use crate::table::NoiseGenerator;
use crate::terrain::{pixel_to_world, Heightmap};

/// Samples a single point according to `config`.
pub fn sample_field(sampler: &KernelSampler<'_>, point: DVec2, config: &RenderConfig) -> f64 {
    let fbm = &config.fbm;
    match config.slice {
        None => match config.mode {
            RenderMode::Single => sampler.sample2(point, fbm.frequency),
            RenderMode::Fbm => fbm2(sampler, point, fbm),
            RenderMode::Rotated => fbm2_rotated(sampler, point, fbm, ROTATION_2D),
            RenderMode::Warp => domain_warp2(sampler, point, fbm, config.warp_strength),
        },
        Some(z) => {
            let p = DVec3::new(point.x, point.y, z);
            match config.mode {
                RenderMode::Single => sampler.sample3(p, fbm.frequency),
                RenderMode::Fbm => fbm3(sampler, p, fbm),
                RenderMode::Rotated => fbm3_rotated(sampler, p, fbm, ROTATION_3D),
                RenderMode::Warp => domain_warp3(sampler, p, fbm, config.warp_strength),
            }
        }
    }
}

/// Renders the raw (unnormalized) field described by `config`.
pub fn render_field(generator: &NoiseGenerator, config: &RenderConfig) -> Heightmap {
    let sampler = config.kernel.bind(generator);
    let map = Heightmap::from_fn(config.width, config.height, |x, y| {
        sample_field(&sampler, pixel_to_world(x, y, config.origin, config.spacing), config)
    });
    debug!(
        kernel = config.kernel.name(),
        mode = ?config.mode,
        width = config.width,
        height = config.height,
        "rendered field"
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::Kernel;

    fn small_config(kernel: Kernel, mode: RenderMode) -> RenderConfig {
        RenderConfig {
            kernel,
            mode,
            width: 24,
            height: 16,
            spacing: 3.0,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_render_matches_direct_sampling() {
        let generator = NoiseGenerator::new(42);
        let config = small_config(Kernel::Simplex, RenderMode::Fbm);
        let map = render_field(&generator, &config);

        let expected = generator.fbm_simplex2(10.5, 7.5, &config.fbm);
        assert_eq!(map.get(3, 2), expected);
    }

    #[test]
    fn test_all_modes_render_finite_fields() {
        let generator = NoiseGenerator::default();
        for kernel in Kernel::ALL {
            for mode in [RenderMode::Single, RenderMode::Fbm, RenderMode::Rotated, RenderMode::Warp] {
                for slice in [None, Some(2.5)] {
                    let config = RenderConfig {
                        slice,
                        ..small_config(kernel, mode)
                    };
                    let map = render_field(&generator, &config);
                    assert_eq!(map.values.len(), 24 * 16);
                    assert!(
                        map.values.iter().all(|v| v.is_finite()),
                        "{} {:?} {:?} produced non-finite values",
                        kernel.name(),
                        mode,
                        slice
                    );
                    let (min, max) = map.value_range();
                    assert!(max > min, "{} {:?} rendered a flat field", kernel.name(), mode);
                }
            }
        }
    }

    #[test]
    fn test_slice_samples_3d_kernel() {
        let generator = NoiseGenerator::new(7);
        let config = RenderConfig {
            slice: Some(1.25),
            ..small_config(Kernel::Perlin, RenderMode::Single)
        };
        let map = render_field(&generator, &config);
        assert_eq!(
            map.get(5, 4),
            generator.perlin3(16.5, 13.5, 1.25, config.fbm.frequency)
        );
    }
}
