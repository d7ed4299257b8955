use super::decompose::*;
use super::matrix4x4::*;
use crate::core::base::*;

// m[r][c] * m[r+1][c+k] * m[r+2][c+2k] along the wrapped diagonals.
#[inline]
fn diagonal_product(m: &Matrix4x4, shift: usize, step: usize) -> Float {
    let mut p = 1.0;
    for row in 0..3 {
        let col = (shift + step * row) % 3;
        p *= m.get(row, col);
    }
    return p;
}

/// Determinant of the upper-left 3x3 block after the basis columns are
/// normalized, by the rule of Sarrus.
///
/// Translation and scale do not contribute: the result is about +1 for a
/// rotation, about -1 for a reflection and 0 only for degenerate bases.
pub fn determinant(m: &Matrix4x4) -> Float {
    let mm = without_scale(m);
    // m00 m11 m22, m01 m12 m20, m02 m10 m21
    let positive = diagonal_product(&mm, 0, 1) + diagonal_product(&mm, 1, 1) + diagonal_product(&mm, 2, 1);
    // m00 m12 m21, m01 m10 m22, m02 m11 m20
    let negative = diagonal_product(&mm, 0, 2) + diagonal_product(&mm, 1, 2) + diagonal_product(&mm, 2, 2);
    return positive - negative;
}

/// Determinant of the 3x3 block including scale.
pub fn affine_determinant(m: &Matrix4x4) -> Float {
    let s = scale(m);
    return determinant(m) * s.x * s.y * s.z;
}
