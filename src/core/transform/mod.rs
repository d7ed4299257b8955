pub mod compose;
pub mod decompose;
pub mod determinant;
pub mod interpolate;
pub mod matrix4x4;
pub mod session;
pub mod validate;

pub use compose::*;
pub use decompose::*;
pub use determinant::*;
pub use interpolate::*;
pub use matrix4x4::Matrix4x4;
pub use session::*;
pub use validate::*;
