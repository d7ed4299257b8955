pub use super::base::*;
pub use super::error::*;
pub use super::frame::*;
pub use super::geometry::*;
pub use super::options::*;
pub use super::quaternion::*;
pub use super::rng::*;
pub use super::sampling::*;
pub use super::transform::*;
