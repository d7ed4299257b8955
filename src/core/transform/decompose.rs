use super::matrix4x4::*;
use crate::core::base::*;
use crate::core::quaternion::*;

use log::*;

pub fn translation(m: &Matrix4x4) -> Vector3f {
    m.column(3)
}

/// Lengths of the three basis columns.
pub fn scale(m: &Matrix4x4) -> Vector3f {
    Vector3f::new(m.column(0).length(), m.column(1).length(), m.column(2).length())
}

/// Copy of `m` with basis columns 0..3 normalized to unit length.
///
/// Columns too short to normalize become zero.
pub fn without_scale(m: &Matrix4x4) -> Matrix4x4 {
    let mut mm = *m;
    for i in 0..3 {
        let c = m.column(i).normalize_or_zero();
        mm.set_column(i, &c, m.get(3, i));
    }
    return mm;
}

/// Rotation of the basis columns with scale removed.
///
/// The axis comes from the sum of `cross(column_i, axis_i)`, which is
/// `-2 sin(theta) * n` for a rotation by `theta` about `n`. The angle comes
/// from the trace. A vanishing axis (no rotation, or exactly half a turn)
/// yields the identity.
pub fn rotation(m: &Matrix4x4) -> Quaternion {
    let mm = without_scale(m);
    let c0 = mm.column(0);
    let c1 = mm.column(1);
    let c2 = mm.column(2);
    let r = Vector3f::cross(&c0, &Vector3f::right())
        + Vector3f::cross(&c1, &Vector3f::up())
        + Vector3f::cross(&c2, &Vector3f::forward());
    if r.is_nearly_zero() {
        trace!("no rotation axis, using identity");
        return Quaternion::identity();
    }

    let trace = c0.x + c1.y + c2.z;
    let cos_angle = Float::clamp((trace - 1.0) / 2.0, -1.0, 1.0);
    let cos_half = Float::sqrt((1.0 + cos_angle) / 2.0);
    let sin_half = Float::sqrt((1.0 - cos_angle) / 2.0);
    let axis = r.normalize_or_zero() * -sin_half;
    return Quaternion::from_scalar_vector(cos_half, &axis).normalize();
}

/// Splits `m` into translation, rotation and scale.
pub fn decompose(m: &Matrix4x4) -> (Vector3f, Quaternion, Vector3f) {
    let t = translation(m);
    let q = rotation(m);
    let s = scale(m);
    return (t, q, s);
}
