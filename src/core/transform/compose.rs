use super::decompose;
use super::matrix4x4::*;
use crate::core::base::*;
use crate::core::quaternion::*;

/// World right, up and forward for `i` = 0, 1, 2.
#[inline]
pub fn unit_axis(i: usize) -> Vector3f {
    match i {
        0 => Vector3f::right(),
        1 => Vector3f::up(),
        _ => Vector3f::forward(),
    }
}

/// Builds a matrix from translation, rotation and scale.
///
/// Inverse of `decompose` for shear-free matrices.
pub fn compose(t: &Vector3f, q: &Quaternion, s: &Vector3f) -> Matrix4x4 {
    let mut m = Matrix4x4::identity();
    for i in 0..3 {
        let axis = (*q * unit_axis(i)) * s[i];
        m.set_column(i, &axis, 0.0);
    }
    m.set_column(3, t, 1.0);
    return m;
}

pub fn with_translation(m: &Matrix4x4, t: &Vector3f) -> Matrix4x4 {
    let mut mm = *m;
    mm.set_column(3, t, 1.0);
    return mm;
}

/// Replaces the orientation of the basis columns, keeping their lengths.
pub fn with_rotation(m: &Matrix4x4, q: &Quaternion) -> Matrix4x4 {
    let s = decompose::scale(m);
    let mut mm = *m;
    for i in 0..3 {
        let axis = (*q * unit_axis(i)) * s[i];
        mm.set_column(i, &axis, m.get(3, i));
    }
    return mm;
}

/// Rescales the basis columns to the lengths in `s`, keeping their directions.
pub fn with_scale(m: &Matrix4x4, s: &Vector3f) -> Matrix4x4 {
    let mut mm = *m;
    for i in 0..3 {
        let axis = m.column(i).normalize_or_zero() * s[i];
        mm.set_column(i, &axis, m.get(3, i));
    }
    return mm;
}

pub fn reset_translation(m: &Matrix4x4) -> Matrix4x4 {
    with_translation(m, &Vector3f::zero())
}

pub fn reset_rotation(m: &Matrix4x4) -> Matrix4x4 {
    with_rotation(m, &Quaternion::identity())
}

pub fn reset_scale(m: &Matrix4x4) -> Matrix4x4 {
    with_scale(m, &Vector3f::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let m = compose(
            &Vector3f::new(1.0, 2.0, 3.0),
            &Quaternion::identity(),
            &Vector3f::new(2.0, 3.0, 4.0),
        );
        let expected = Matrix4x4::translate(1.0, 2.0, 3.0) * Matrix4x4::scale(2.0, 3.0, 4.0);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_002() {
        let q = Quaternion::from_angle_axis(90.0, &Vector3f::up());
        let m = compose(&Vector3f::zero(), &q, &Vector3f::one());
        assert!(m.max_abs_diff(&Matrix4x4::rotate_y(90.0)) < 1e-6, "{:?}", m);
    }

    #[test]
    fn test_003() {
        let m = Matrix4x4::translate(4.0, 5.0, 6.0)
            * Matrix4x4::rotate_x(40.0)
            * Matrix4x4::scale(2.0, 2.0, 2.0);
        let r = reset_rotation(&m);
        let expected = Matrix4x4::translate(4.0, 5.0, 6.0) * Matrix4x4::scale(2.0, 2.0, 2.0);
        assert!(r.max_abs_diff(&expected) < 1e-5, "{:?}", r);

        let r = reset_scale(&m);
        let expected = Matrix4x4::translate(4.0, 5.0, 6.0) * Matrix4x4::rotate_x(40.0);
        assert!(r.max_abs_diff(&expected) < 1e-5, "{:?}", r);

        let r = reset_translation(&m);
        assert_eq!(r.column(3), Vector3f::zero());
        assert_eq!(r.column(0), m.column(0));
    }

    #[test]
    fn test_004() {
        let m = with_scale(&Matrix4x4::identity(), &Vector3f::new(1.0, 5.0, 1.0));
        assert_eq!(m, Matrix4x4::scale(1.0, 5.0, 1.0));
        let m = with_translation(&m, &Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(m.get(2, 3), -1.0);
        assert_eq!(m.get(3, 3), 1.0);
    }
}
