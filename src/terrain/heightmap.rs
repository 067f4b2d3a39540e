//! Row-major scalar grids filled from noise or terrain samplers.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sampler::TerrainSampler;

/// A `width x height` grid of heights stored row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heightmap {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f64>,
}

impl Heightmap {
    /// Creates a zero-filled heightmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    /// Fills a heightmap by calling `f(x, y)` for every pixel, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let i = self.index(x, y);
        self.values[i] = value;
    }

    /// Returns `(min, max)` over all values, or `(0, 0)` when empty.
    pub fn value_range(&self) -> (f64, f64) {
        if self.values.is_empty() {
            return (0.0, 0.0);
        }
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Rescales values into `[0, 1]` by min and max.
    ///
    /// A field whose range is below `1e-6` is treated as having range 1, so a
    /// flat map becomes all zeros instead of dividing by zero.
    pub fn normalize(&mut self) {
        let (min, max) = self.value_range();
        let mut range = max - min;
        if range < 1e-6 {
            range = 1.0;
        }
        for v in &mut self.values {
            *v = (*v - min) / range;
        }
    }
}

/// Maps a pixel to world space: pixel centres, `spacing` world units apart,
/// starting at `origin`.
#[inline]
pub fn pixel_to_world(x: u32, y: u32, origin: DVec2, spacing: f64) -> DVec2 {
    origin + DVec2::new(x as f64 + 0.5, y as f64 + 0.5) * spacing
}

/// Heights and normals of a terrain region.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMaps {
    pub heights: Heightmap,
    /// One unit normal per pixel, same row-major layout as `heights`.
    pub normals: Vec<DVec3>,
}

/// Samples `sampler` over a `width x height` pixel region.
pub fn generate_terrain_maps(
    sampler: &TerrainSampler,
    width: u32,
    height: u32,
    origin: DVec2,
    spacing: f64,
) -> TerrainMaps {
    let mut normals = Vec::with_capacity(width as usize * height as usize);
    let heights = Heightmap::from_fn(width, height, |x, y| {
        let sample = sampler.height_and_normal(pixel_to_world(x, y, origin, spacing));
        normals.push(sample.normal);
        sample.height
    });
    debug!(width, height, spacing, "generated terrain maps");
    TerrainMaps { heights, normals }
}
