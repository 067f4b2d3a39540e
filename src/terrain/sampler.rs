//! Terrain heights and normals from derivative fBm.

use glam::{DVec2, DVec3};
use tracing::trace;

use super::config::TerrainConfig;
use crate::fractal::{fbm2_raw, fbmd2, ROTATION_2D};
use crate::noise::{smoothstep_with_derivative, ValueNoise};

/// Height, gradient and surface normal at one world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSample {
    pub height: f64,
    /// `(dh/dx, dh/dy)` in world units.
    pub gradient: DVec2,
    /// Unit normal `normalize(-dh/dx, 1, -dh/dy)`, y up.
    pub normal: DVec3,
}

/// Samples a heightfield built from rotated value-noise fBm with a cliff
/// boost, returning exact analytic normals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TerrainSampler {
    config: TerrainConfig,
}

impl TerrainSampler {
    pub fn new(config: TerrainConfig) -> Self {
        trace!(?config, "terrain sampler created");
        Self { config }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    fn noise_space(&self, position: DVec2) -> DVec2 {
        position / self.config.world_scale + self.config.offset
    }

    /// Height and normal at `position` in one pass.
    ///
    /// The cliff term `h + c * smoothstep(h)` scales the gradient by
    /// `1 + c * smoothstep'(h)`, evaluated at the pre-cliff height.
    pub fn height_and_normal(&self, position: DVec2) -> TerrainSample {
        let cfg = &self.config;
        let n = fbmd2(&ValueNoise, self.noise_space(position), &cfg.fbm, ROTATION_2D);

        let mut height = cfg.height_scale * n.x + cfg.base_height;
        let mut gradient = cfg.height_scale * DVec2::new(n.y, n.z);

        let (cliff, cliff_slope) = smoothstep_with_derivative(cfg.cliff_start, cfg.cliff_end, height);
        height += cfg.cliff_height * cliff;
        gradient *= 1.0 + cfg.cliff_height * cliff_slope;

        // Chain rule for the world-to-noise scaling.
        gradient /= cfg.world_scale;

        let normal = DVec3::new(-gradient.x, 1.0, -gradient.y).normalize();

        TerrainSample {
            height,
            gradient,
            normal,
        }
    }

    /// Height alone; equal to `height_and_normal(position).height`.
    pub fn height(&self, position: DVec2) -> f64 {
        let cfg = &self.config;
        let raw = fbm2_raw(&ValueNoise, self.noise_space(position), &cfg.fbm, ROTATION_2D);
        let height = cfg.height_scale * raw + cfg.base_height;
        let (cliff, _) = smoothstep_with_derivative(cfg.cliff_start, cfg.cliff_end, height);
        height + cfg.cliff_height * cliff
    }
}

/// Height and normal at `(x, y)` with the default terrain configuration.
pub fn terrain_height_and_normal(x: f64, y: f64) -> (f64, DVec3) {
    let sample = TerrainSampler::default().height_and_normal(DVec2::new(x, y));
    (sample.height, sample.normal)
}
