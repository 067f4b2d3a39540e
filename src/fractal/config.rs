//! Parameter sets for fractal composition.

use serde::{Deserialize, Serialize};

/// Parameters for normalized fractal Brownian motion.
///
/// `octaves` must be at least 1: with zero octaves the amplitude sum used as
/// the divisor is zero and the result is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbmParams {
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Number of octaves (1-12 typical).
    pub octaves: u32,
    /// Frequency multiplier per octave (typically 2.0).
    pub lacunarity: f64,
    /// Amplitude multiplier per octave (0.4-0.6 typical).
    pub gain: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            frequency: 0.01,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl FbmParams {
    pub fn new(frequency: f64, octaves: u32, lacunarity: f64, gain: f64) -> Self {
        Self {
            frequency,
            octaves,
            lacunarity,
            gain,
        }
    }

    /// Nine slightly irregular octaves, meant for use with a rotation between
    /// octaves.
    pub fn rotated_detail() -> Self {
        Self {
            frequency: 0.01,
            octaves: 9,
            lacunarity: 1.9,
            gain: 0.55,
        }
    }

    pub fn with_frequency(self, frequency: f64) -> Self {
        Self { frequency, ..self }
    }

    pub fn with_octaves(self, octaves: u32) -> Self {
        Self { octaves, ..self }
    }

    /// Iterates the per-octave frequency and amplitude.
    pub fn octave_iter(&self) -> OctaveIter {
        OctaveIter {
            remaining: self.octaves,
            index: 0,
            frequency: self.frequency,
            amplitude: 1.0,
            lacunarity: self.lacunarity,
            gain: self.gain,
        }
    }

    /// Sum of all octave amplitudes, i.e. `sum(gain^i for i in 0..octaves)`.
    ///
    /// This is the divisor applied by the normalized fBm functions.
    pub fn amplitude_sum(&self) -> f64 {
        self.octave_iter().map(|octave| octave.amplitude).sum()
    }
}

/// One octave of an fBm stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    pub index: u32,
    pub frequency: f64,
    pub amplitude: f64,
}

/// Iterator over the octaves described by [`FbmParams`].
#[derive(Debug, Clone)]
pub struct OctaveIter {
    remaining: u32,
    index: u32,
    frequency: f64,
    amplitude: f64,
    lacunarity: f64,
    gain: f64,
}

impl Iterator for OctaveIter {
    type Item = Octave;

    fn next(&mut self) -> Option<Octave> {
        if self.remaining == 0 {
            return None;
        }
        let octave = Octave {
            index: self.index,
            frequency: self.frequency,
            amplitude: self.amplitude,
        };
        self.remaining -= 1;
        self.index += 1;
        self.frequency *= self.lacunarity;
        self.amplitude *= self.gain;
        Some(octave)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for OctaveIter {}

/// Parameters for the unnormalized, rotated fBm used with derivatives.
///
/// The caller pre-scales the sample point; every octave is sampled at
/// frequency 1 and the point is rotated and scaled by `lacunarity` between
/// octaves. The raw amplitude-weighted sum is returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeFbm {
    /// Number of octaves.
    pub octaves: u32,
    /// Scale applied after each rotation.
    pub lacunarity: f64,
    /// Amplitude multiplier per octave.
    pub gain: f64,
    /// Amplitude of the first octave.
    pub amplitude: f64,
}

impl Default for DerivativeFbm {
    fn default() -> Self {
        Self::terrain_2d()
    }
}

impl DerivativeFbm {
    /// Nine-octave stack used for terrain heights.
    pub fn terrain_2d() -> Self {
        Self {
            octaves: 9,
            lacunarity: 1.9,
            gain: 0.55,
            amplitude: 0.5,
        }
    }

    /// Seven-octave volumetric detail stack.
    pub fn detail_3d() -> Self {
        Self {
            octaves: 7,
            lacunarity: 1.92,
            gain: 0.5,
            amplitude: 0.5,
        }
    }

    /// Four-octave stack for cheap 2D detail.
    pub fn coarse_2d() -> Self {
        Self {
            octaves: 4,
            lacunarity: 1.9,
            gain: 0.55,
            amplitude: 0.5,
        }
    }
}
