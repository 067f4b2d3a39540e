//! Fractal composition of the base kernels.
//!
//! The composition functions are generic over [`Noise2`]/[`Noise3`] (and the
//! derivative traits), so they work with any [`Kernel`] bound to a
//! generator as well as with [`ValueNoise`] directly. [`NoiseGenerator`] also
//! gets per-kernel convenience methods.
//!
//! [`Noise2`]: crate::noise::Noise2
//! [`Noise3`]: crate::noise::Noise3
//! [`ValueNoise`]: crate::noise::ValueNoise

mod config;
mod derivative;
mod fbm;
mod rotation;
mod warp;

use glam::{DMat2, DMat3, DVec2, DVec3};

use crate::noise::Kernel;
use crate::table::NoiseGenerator;

pub use config::{DerivativeFbm, FbmParams, Octave, OctaveIter};
pub use derivative::{fbm2_raw, fbm3_raw, fbmd2, fbmd3};
pub use fbm::{fbm2, fbm3};
pub use rotation::{fbm2_rotated, fbm3_rotated, ROTATION_2D, ROTATION_3D};
pub use warp::{
    domain_warp2, domain_warp3, warp_displacement2, warp_displacement3, WARP_OFFSET_2D,
    WARP_OFFSET_3D,
};

impl NoiseGenerator {
    pub fn fbm_perlin2(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        fbm2(&Kernel::Perlin.bind(self), DVec2::new(x, y), params)
    }

    pub fn fbm_perlin3(&self, x: f64, y: f64, z: f64, params: &FbmParams) -> f64 {
        fbm3(&Kernel::Perlin.bind(self), DVec3::new(x, y, z), params)
    }

    pub fn fbm_simplex2(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        fbm2(&Kernel::Simplex.bind(self), DVec2::new(x, y), params)
    }

    pub fn fbm_simplex3(&self, x: f64, y: f64, z: f64, params: &FbmParams) -> f64 {
        fbm3(&Kernel::Simplex.bind(self), DVec3::new(x, y, z), params)
    }

    pub fn fbm_value2(&self, x: f64, y: f64, params: &FbmParams) -> f64 {
        fbm2(&Kernel::Value.bind(self), DVec2::new(x, y), params)
    }

    pub fn fbm_value3(&self, x: f64, y: f64, z: f64, params: &FbmParams) -> f64 {
        fbm3(&Kernel::Value.bind(self), DVec3::new(x, y, z), params)
    }

    pub fn fbm_perlin2_rotation(&self, x: f64, y: f64, params: &FbmParams, rotation: DMat2) -> f64 {
        fbm2_rotated(&Kernel::Perlin.bind(self), DVec2::new(x, y), params, rotation)
    }

    pub fn fbm_perlin3_rotation(
        &self,
        x: f64,
        y: f64,
        z: f64,
        params: &FbmParams,
        rotation: DMat3,
    ) -> f64 {
        fbm3_rotated(&Kernel::Perlin.bind(self), DVec3::new(x, y, z), params, rotation)
    }

    pub fn fbm_simplex2_rotation(&self, x: f64, y: f64, params: &FbmParams, rotation: DMat2) -> f64 {
        fbm2_rotated(&Kernel::Simplex.bind(self), DVec2::new(x, y), params, rotation)
    }

    pub fn fbm_simplex3_rotation(
        &self,
        x: f64,
        y: f64,
        z: f64,
        params: &FbmParams,
        rotation: DMat3,
    ) -> f64 {
        fbm3_rotated(&Kernel::Simplex.bind(self), DVec3::new(x, y, z), params, rotation)
    }

    pub fn fbm_value2_rotation(&self, x: f64, y: f64, params: &FbmParams, rotation: DMat2) -> f64 {
        fbm2_rotated(&Kernel::Value.bind(self), DVec2::new(x, y), params, rotation)
    }

    pub fn fbm_value3_rotation(
        &self,
        x: f64,
        y: f64,
        z: f64,
        params: &FbmParams,
        rotation: DMat3,
    ) -> f64 {
        fbm3_rotated(&Kernel::Value.bind(self), DVec3::new(x, y, z), params, rotation)
    }

    /// Domain-warped fBm of `kernel`. See [`domain_warp2`].
    pub fn domain_warp_fbm2(
        &self,
        kernel: Kernel,
        x: f64,
        y: f64,
        params: &FbmParams,
        warp_strength: f64,
    ) -> f64 {
        domain_warp2(&kernel.bind(self), DVec2::new(x, y), params, warp_strength)
    }

    /// Domain-warped 3D fBm of `kernel`. See [`domain_warp3`].
    pub fn domain_warp_fbm3(
        &self,
        kernel: Kernel,
        point: DVec3,
        params: &FbmParams,
        warp_strength: f64,
    ) -> f64 {
        domain_warp3(&kernel.bind(self), point, params, warp_strength)
    }
}
