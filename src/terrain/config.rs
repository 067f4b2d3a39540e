//! Configuration for analytic terrain sampling.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::fractal::DerivativeFbm;

/// Parameters mapping world positions to terrain heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// World units per unit of noise space.
    pub world_scale: f64,
    /// Noise-space offset added after scaling.
    pub offset: DVec2,
    /// Octave stack sampled in noise space.
    pub fbm: DerivativeFbm,
    /// Multiplier applied to the raw fBm value.
    pub height_scale: f64,
    /// Height added after scaling.
    pub base_height: f64,
    /// Height at which the cliff boost starts.
    pub cliff_start: f64,
    /// Height at which the cliff boost saturates.
    pub cliff_end: f64,
    /// Extra height added once the cliff saturates.
    pub cliff_height: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            world_scale: 2000.0,
            offset: DVec2::new(1.0, -2.0),
            fbm: DerivativeFbm::terrain_2d(),
            height_scale: 600.0,
            base_height: 600.0,
            cliff_start: 550.0,
            cliff_end: 600.0,
            cliff_height: 90.0,
        }
    }
}

impl TerrainConfig {
    /// Same shape as the default with the cliff boost disabled.
    pub fn without_cliffs() -> Self {
        Self {
            cliff_height: 0.0,
            ..Default::default()
        }
    }

    /// Gentle rolling hills: fewer octaves and a lower height range.
    pub fn rolling_hills() -> Self {
        Self {
            fbm: DerivativeFbm::coarse_2d(),
            height_scale: 150.0,
            base_height: 100.0,
            cliff_height: 0.0,
            ..Default::default()
        }
    }
}
