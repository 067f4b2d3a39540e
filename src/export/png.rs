//! PNG export for heightmaps and normal maps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::DVec3;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};
use thiserror::Error;
use tracing::debug;

use crate::terrain::Heightmap;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Buffer holds {actual} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

fn check_dims(width: u32, height: u32, len: usize) -> Result<(), ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions(width, height));
    }
    let expected = width as usize * height as usize;
    if len != expected {
        return Err(ExportError::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Writes a heightmap whose values are already in `[0, 1]` as a 16-bit
/// grayscale PNG. Values outside the unit range are clamped.
///
/// Callers normalize first (see [`Heightmap::normalize`]).
pub fn export_heightmap_png(
    map: &Heightmap,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    check_dims(map.width, map.height, map.values.len())?;

    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(map.width, map.height);
    for y in 0..map.height {
        for x in 0..map.width {
            let normalized = map.get(x, y).clamp(0.0, 1.0);
            img.put_pixel(x, y, Luma([(normalized * 65535.0) as u16]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(byte_slice, map.width, map.height, image::ExtendedColorType::L16)?;

    debug!(path = %path.display(), width = map.width, height = map.height, "wrote heightmap");
    Ok(())
}

fn encode_normal_rgb8(n: DVec3) -> [u8; 3] {
    let c = n * 0.5 + DVec3::splat(0.5);
    [
        (c.x.clamp(0.0, 1.0) * 255.0) as u8,
        (c.y.clamp(0.0, 1.0) * 255.0) as u8,
        (c.z.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

/// Writes unit normals (row-major) as an RGB PNG, mapping `[-1, 1]` to
/// `[0, 255]` per channel.
pub fn export_normal_map_png(
    width: u32,
    height: u32,
    normals: &[DVec3],
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    check_dims(width, height, normals.len())?;

    let mut raw = Vec::with_capacity(normals.len() * 3);
    for &n in normals {
        raw.extend_from_slice(&encode_normal_rgb8(n));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(&raw, width, height, image::ExtendedColorType::Rgb8)?;

    debug!(path = %path.display(), width, height, "wrote normal map");
    Ok(())
}
