use crate::core::base::*;
use serde::{Deserialize, Serialize};
use std::ops;

/// Rotation quaternion with vector part `(x, y, z)` and scalar part `w`.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Quaternion { x, y, z, w }
    }

    pub fn from_scalar_vector(w: Float, v: &Vector3f) -> Self {
        Quaternion::new(v.x, v.y, v.z, w)
    }

    pub fn identity() -> Self {
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// `theta` is in degrees, matching `Matrix4x4::rotate`.
    pub fn from_angle_axis(theta: Float, axis: &Vector3f) -> Self {
        let half = radians(theta) * 0.5;
        let a = axis.normalize() * Float::sin(half);
        Quaternion::from_scalar_vector(Float::cos(half), &a)
    }

    pub fn dot(&self, q: &Quaternion) -> Float {
        return (self.x * q.x) + (self.y * q.y) + (self.z * q.z) + (self.w * q.w);
    }

    pub fn length(&self) -> Float {
        return Float::sqrt(self.dot(self));
    }

    /// Unit quaternion in the same direction. Falls back to the identity when
    /// the length is below `NORMALIZE_EPSILON`.
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if l < NORMALIZE_EPSILON {
            return Quaternion::identity();
        }
        return Quaternion::new(self.x / l, self.y / l, self.z / l, self.w / l);
    }

    pub fn vector_part(&self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    /// Flips the sign of the scalar part only.
    ///
    /// For a unit quaternion this is the inverse rotation with every
    /// component negated, i.e. the opposite sheet of the double cover.
    pub fn inverse(&self) -> Self {
        Quaternion::new(self.x, self.y, self.z, -self.w)
    }

    /// Negates all four components. Same rotation, other sign.
    pub fn inverse_full(&self) -> Self {
        -(*self)
    }

    /// Rotates `v` by this quaternion (`q v q*`).
    pub fn rotate_vector(&self, v: &Vector3f) -> Vector3f {
        let u = self.vector_part();
        let t = Vector3f::cross(&u, v) * 2.0;
        return *v + t * self.w + Vector3f::cross(&u, &t);
    }
}

impl ops::Add<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl ops::Sub<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

// Hamilton product
impl ops::Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl ops::Mul<Vector3f> for Quaternion {
    type Output = Vector3f;
    fn mul(self, rhs: Vector3f) -> Vector3f {
        self.rotate_vector(&rhs)
    }
}

impl ops::Mul<Float> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Float) -> Quaternion {
        Quaternion {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl ops::Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        return Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: &Vector3f, b: &Vector3f) -> bool {
        Vector3f::distance(a, b) < 1e-5
    }

    #[test]
    fn test_001() {
        let q = Quaternion::from_angle_axis(90.0, &Vector3f::up());
        let v = q * Vector3f::right();
        assert!(near(&v, &Vector3f::new(0.0, 0.0, -1.0)), "{:?}", v);
        let v = q * Vector3f::forward();
        assert!(near(&v, &Vector3f::right()), "{:?}", v);
    }

    #[test]
    fn test_002() {
        let q1 = Quaternion::from_angle_axis(30.0, &Vector3f::new(1.0, 2.0, 3.0));
        let q2 = Quaternion::from_angle_axis(70.0, &Vector3f::new(-1.0, 0.5, 0.0));
        let v = Vector3f::new(0.3, -2.0, 1.5);
        let a = (q2 * q1) * v;
        let b = q2 * (q1 * v);
        assert!(near(&a, &b), "{:?} {:?}", a, b);
    }

    #[test]
    fn test_003() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let qi = q.inverse();
        assert_eq!(qi, Quaternion::new(0.1, 0.2, 0.3, -0.9));
        assert_eq!(q.inverse_full(), Quaternion::new(-0.1, -0.2, -0.3, -0.9));
    }

    #[test]
    fn test_004() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(q, Quaternion::identity());
        let q = Quaternion::new(0.0, 0.0, 0.0, 2.0).normalize();
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn test_005() {
        let q = Quaternion::from_angle_axis(45.0, &Vector3f::forward());
        let r = q * Quaternion::identity();
        assert_eq!(q, r);
        let p = q * q.inverse();
        assert!((p.w + 1.0).abs() < 1e-6);
        assert!(p.vector_part().length() < 1e-6);
    }
}
