use super::types::Float;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::*;

    pub const PI: Float = std::f32::consts::PI; //3.14159265358979323846;
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::*;

    pub const PI: Float = std::f64::consts::PI; //3.14159265358979323846;
}

pub use detail::*;

// Below this length a vector or quaternion is treated as zero when normalizing.
pub const NORMALIZE_EPSILON: Float = 1e-5;

// Squared length under which the accumulated rotation axis counts as the zero vector.
pub const ZERO_AXIS_EPSILON: Float = 1e-10;

pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;
