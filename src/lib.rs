//! Decomposition, composition and interpolation of affine transforms.
//!
//! A 4x4 matrix is split into translation, rotation and per-axis scale
//! ([`core::transform::decompose`]), rebuilt from those parts
//! ([`core::transform::compose`]) and blended between two endpoints with
//! per-component switches ([`core::transform::interpolate`]).
//!
//! ```
//! use trs_blend::core::prelude::*;
//!
//! let a = Matrix4x4::identity();
//! let b = Matrix4x4::translate(5.0, 0.0, 0.0) * Matrix4x4::rotate_y(90.0);
//! let m = interpolate(&a, &b, 0.5, &InterpolationFlags::all());
//! assert!((translation(&m).x - 2.5).abs() < 1e-5);
//! ```

pub mod core;
