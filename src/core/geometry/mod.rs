pub mod numeric_traits;
pub mod vector3;

pub use vector3::*;
