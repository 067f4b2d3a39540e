//! Small interpolation helpers shared by the kernels and the terrain layer.

use crate::table::TABLE_SIZE;

/// Quintic fade `6t^5 - 15t^4 + 10t^3`.
#[inline(always)]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Derivative of [`fade`]: `30t^4 - 60t^3 + 30t^2`.
#[inline(always)]
pub fn fade_derivative(t: f64) -> f64 {
    30.0 * t * t * (t * (t - 2.0) + 1.0)
}

#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// `x - floor(x)`, always in `[0, 1)` for finite input.
#[inline(always)]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Splits a coordinate into its lattice cell (masked to the table size) and
/// the offset inside that cell.
#[inline(always)]
pub(crate) fn lattice(x: f64) -> (usize, f64) {
    let cell = x.floor();
    (wrap_cell(cell), x - cell)
}

/// Masks an already-floored coordinate into `0..256`.
#[inline(always)]
pub(crate) fn wrap_cell(cell: f64) -> usize {
    (cell as i64 & (TABLE_SIZE as i64 - 1)) as usize
}

/// Cubic smoothstep between `edge0` and `edge1`, returned with its derivative
/// with respect to `x`.
///
/// Outside the edges the value saturates to 0 or 1 and the derivative is 0.
pub fn smoothstep_with_derivative(edge0: f64, edge1: f64, x: f64) -> (f64, f64) {
    if x < edge0 {
        return (0.0, 0.0);
    }
    if x > edge1 {
        return (1.0, 0.0);
    }
    let inv_range = 1.0 / (edge1 - edge0);
    let t = (x - edge0) * inv_range;
    (t * t * (3.0 - 2.0 * t), 6.0 * t * (1.0 - t) * inv_range)
}
