use crate::core::base::*;
use crate::core::quaternion::*;
use crate::core::rng::*;
use crate::core::transform::*;

pub fn uniform_sample_sphere(u: &[Float; 2]) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u[1];
    return Vector3f::new(r * Float::cos(phi), r * Float::sin(phi), z);
}

/// Random rotation of less than half a turn, so that it survives
/// `decompose` unchanged.
pub fn random_rotation(rng: &mut RNG) -> Quaternion {
    let theta = rng.uniform_range(1.0, 170.0);
    let u = [rng.uniform_float(), rng.uniform_float()];
    let axis = uniform_sample_sphere(&u);
    return Quaternion::from_angle_axis(theta, &axis);
}

/// Random shear-free transform with positive scale.
pub fn random_affine(rng: &mut RNG) -> Matrix4x4 {
    let t = Vector3f::new(
        rng.uniform_range(-10.0, 10.0),
        rng.uniform_range(-10.0, 10.0),
        rng.uniform_range(-10.0, 10.0),
    );
    let q = random_rotation(rng);
    let s = Vector3f::new(
        rng.uniform_range(0.1, 5.0),
        rng.uniform_range(0.1, 5.0),
        rng.uniform_range(0.1, 5.0),
    );
    return compose(&t, &q, &s);
}
