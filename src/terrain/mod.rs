//! Terrain sampling on top of derivative fBm.
//!
//! Provides single-point height/normal queries and grid generation for
//! export.

mod config;
mod heightmap;
mod sampler;

pub use config::TerrainConfig;
pub use heightmap::{generate_terrain_maps, pixel_to_world, Heightmap, TerrainMaps};
pub use sampler::{terrain_height_and_normal, TerrainSample, TerrainSampler};
