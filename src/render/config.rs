//! Render configuration, loadable from JSON.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fractal::FbmParams;
use crate::noise::Kernel;
use crate::table::DEFAULT_SEED;

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the kernel is composed before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// A single octave at `fbm.frequency`.
    Single,
    /// Normalized fBm.
    Fbm,
    /// fBm with the canonical inter-octave rotation.
    Rotated,
    /// Domain-warped fBm.
    Warp,
}

/// Everything needed to render one noise field to an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub seed: u32,
    pub kernel: Kernel,
    pub mode: RenderMode,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// World position of pixel (0, 0).
    pub origin: DVec2,
    /// World units per pixel.
    pub spacing: f64,
    /// When set, samples the 3D kernel on the plane `z = slice`.
    pub slice: Option<f64>,
    pub fbm: FbmParams,
    /// Displacement scale for [`RenderMode::Warp`].
    pub warp_strength: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            kernel: Kernel::Perlin,
            mode: RenderMode::Fbm,
            width: 512,
            height: 512,
            origin: DVec2::ZERO,
            spacing: 1.0,
            slice: None,
            fbm: FbmParams::default(),
            warp_strength: 4.0,
        }
    }
}

impl RenderConfig {
    /// Reads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RenderConfig::from_json_str(
            r#"{ "kernel": "simplex", "mode": "warp", "fbm": { "octaves": 6 } }"#,
        )
        .unwrap();
        assert_eq!(config.kernel, Kernel::Simplex);
        assert_eq!(config.mode, RenderMode::Warp);
        assert_eq!(config.fbm.octaves, 6);
        assert_eq!(config.fbm.lacunarity, FbmParams::default().lacunarity);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.slice, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = RenderConfig {
            slice: Some(3.5),
            origin: DVec2::new(-10.0, 4.0),
            ..RenderConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let result = RenderConfig::from_json_str(r#"{ "kernel": "worley" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RenderConfig::from_json_file(Path::new("/nonexistent/render.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
