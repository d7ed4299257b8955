pub mod base;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod options;
pub mod prelude;
pub mod quaternion;
pub mod rng;
pub mod sampling;
pub mod transform;
