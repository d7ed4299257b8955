use crate::core::base::*;
use serde::{Deserialize, Serialize};
use std::ops;

/// Row-major 4x4 matrix, element `(row, col)` at `m[4 * row + col]`.
///
/// Columns 0..3 hold the basis axes (right, up, forward) and column 3 the
/// translation, so points are transformed as column vectors.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [Float; 16],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4x4 {
    pub fn new(
        e0: Float,
        e1: Float,
        e2: Float,
        e3: Float,
        e4: Float,
        e5: Float,
        e6: Float,
        e7: Float,
        e8: Float,
        e9: Float,
        e10: Float,
        e11: Float,
        e12: Float,
        e13: Float,
        e14: Float,
        e15: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
            ],
        }
    }

    pub fn identity() -> Self {
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translate(x: Float, y: Float, z: Float) -> Self {
        return Matrix4x4::new(
            1.0, 0.0, 0.0, x, 0.0, 1.0, 0.0, y, 0.0, 0.0, 1.0, z, 0.0, 0.0, 0.0, 1.0,
        );
    }

    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        Matrix4x4 {
            m: [
                x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotate_x(theta: Float) -> Self {
        let s = Float::sin(radians(theta));
        let c = Float::cos(radians(theta));
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, 0.0, 0.0, c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotate_y(theta: Float) -> Self {
        let s = Float::sin(radians(theta));
        let c = Float::cos(radians(theta));
        Matrix4x4 {
            m: [
                c, 0.0, s, 0.0, 0.0, 1.0, 0.0, 0.0, -s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotate_z(theta: Float) -> Self {
        let s = Float::sin(radians(theta));
        let c = Float::cos(radians(theta));
        Matrix4x4 {
            m: [
                c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation of `theta` degrees about the axis `(x, y, z)`.
    pub fn rotate(theta: Float, x: Float, y: Float, z: Float) -> Self {
        let a = Vector3f::new(x, y, z).normalize();
        let sin_theta = Float::sin(radians(theta));
        let cos_theta = Float::cos(radians(theta));
        let mut m = Matrix4x4::identity();
        // Compute rotation of first basis vector
        m.m[4 * 0 + 0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[4 * 0 + 1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[4 * 0 + 2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;

        // Compute rotations of second and third basis vectors
        m.m[4 * 1 + 0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[4 * 1 + 1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[4 * 1 + 2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;

        m.m[4 * 2 + 0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[4 * 2 + 1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[4 * 2 + 2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        return m;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.m[4 * row + col]
    }

    /// xyz of column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector3f {
        Vector3f::new(self.m[col], self.m[4 + col], self.m[8 + col])
    }

    /// Writes xyz of column `col` and its homogeneous row-3 entry `w`.
    #[inline]
    pub fn set_column(&mut self, col: usize, v: &Vector3f, w: Float) {
        self.m[col] = v.x;
        self.m[4 + col] = v.y;
        self.m[8 + col] = v.z;
        self.m[12 + col] = w;
    }

    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x = p.x;
        let y = p.y;
        let z = p.z;
        let xp = self.m[0] * x + self.m[1] * y + self.m[2] * z + self.m[3];
        let yp = self.m[4] * x + self.m[5] * y + self.m[6] * z + self.m[7];
        let zp = self.m[8] * x + self.m[9] * y + self.m[10] * z + self.m[11];
        let wp = self.m[12] * x + self.m[13] * y + self.m[14] * z + self.m[15];
        if wp == 1.0 {
            return Point3f::new(xp, yp, zp);
        } else {
            return Point3f::new(xp / wp, yp / wp, zp / wp);
        }
    }

    pub fn transform_vector(&self, p: &Vector3f) -> Vector3f {
        let x = p.x;
        let y = p.y;
        let z = p.z;
        let xp = self.m[0] * x + self.m[1] * y + self.m[2] * z;
        let yp = self.m[4] * x + self.m[5] * y + self.m[6] * z;
        let zp = self.m[8] * x + self.m[9] * y + self.m[10] * z;
        return Vector3f::new(xp, yp, zp);
    }

    /// Largest absolute element-wise difference.
    pub fn max_abs_diff(&self, rhs: &Matrix4x4) -> Float {
        self.m
            .iter()
            .zip(rhs.m.iter())
            .fold(0.0, |acc: Float, (a, b)| acc.max((a - b).abs()))
    }
}

fn mul4x4(a: &[Float], b: &[Float]) -> Float {
    return a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];
}

impl ops::Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        Matrix4x4::new(
            mul4x4(&self.m[0..4], &[rhs.m[0], rhs.m[4], rhs.m[8], rhs.m[12]]),
            mul4x4(&self.m[0..4], &[rhs.m[1], rhs.m[5], rhs.m[9], rhs.m[13]]),
            mul4x4(&self.m[0..4], &[rhs.m[2], rhs.m[6], rhs.m[10], rhs.m[14]]),
            mul4x4(&self.m[0..4], &[rhs.m[3], rhs.m[7], rhs.m[11], rhs.m[15]]),
            mul4x4(&self.m[4..8], &[rhs.m[0], rhs.m[4], rhs.m[8], rhs.m[12]]),
            mul4x4(&self.m[4..8], &[rhs.m[1], rhs.m[5], rhs.m[9], rhs.m[13]]),
            mul4x4(&self.m[4..8], &[rhs.m[2], rhs.m[6], rhs.m[10], rhs.m[14]]),
            mul4x4(&self.m[4..8], &[rhs.m[3], rhs.m[7], rhs.m[11], rhs.m[15]]),
            mul4x4(&self.m[8..12], &[rhs.m[0], rhs.m[4], rhs.m[8], rhs.m[12]]),
            mul4x4(&self.m[8..12], &[rhs.m[1], rhs.m[5], rhs.m[9], rhs.m[13]]),
            mul4x4(&self.m[8..12], &[rhs.m[2], rhs.m[6], rhs.m[10], rhs.m[14]]),
            mul4x4(&self.m[8..12], &[rhs.m[3], rhs.m[7], rhs.m[11], rhs.m[15]]),
            mul4x4(&self.m[12..16], &[rhs.m[0], rhs.m[4], rhs.m[8], rhs.m[12]]),
            mul4x4(&self.m[12..16], &[rhs.m[1], rhs.m[5], rhs.m[9], rhs.m[13]]),
            mul4x4(&self.m[12..16], &[rhs.m[2], rhs.m[6], rhs.m[10], rhs.m[14]]),
            mul4x4(&self.m[12..16], &[rhs.m[3], rhs.m[7], rhs.m[11], rhs.m[15]]),
        )
    }
}
