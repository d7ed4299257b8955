use super::constants::*;
use super::types::*;

#[inline]
pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    return (1.0 - t) * v1 + t * v2;
}

#[inline]
pub fn radians(deg: Float) -> Float {
    return deg * (PI / 180.0);
}
