//! Compiled-in gradient lookup tables.

/// Eight 2D gradients: the diagonals followed by the axes.
pub const GRADIENTS_2D: [[f64; 2]; 8] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Twelve cube-edge directions padded to 16 so a 4-bit hash indexes directly.
pub const GRADIENTS_3D: [[f64; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [0.0, -1.0, -1.0],
];

/// Dot product of the 2D gradient selected by the low three bits of `hash`.
#[inline(always)]
pub(crate) fn grad2_dot(hash: usize, x: f64, y: f64) -> f64 {
    let g = &GRADIENTS_2D[hash & 7];
    g[0] * x + g[1] * y
}

/// Dot product of the 3D gradient selected by the low four bits of `hash`.
#[inline(always)]
pub(crate) fn grad3_dot(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let g = &GRADIENTS_3D[hash & 15];
    g[0] * x + g[1] * y + g[2] * z
}
