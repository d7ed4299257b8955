//! Line geometry for displaying an interpolated transform.
//!
//! Nothing here draws: a viewer takes the twelve edges of the unit cube
//! spanned by a matrix's basis and renders them in their axis colors.

use crate::core::base::*;
use crate::core::transform::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Axis {
    Right,
    Up,
    Forward,
}

impl Axis {
    pub fn index(&self) -> usize {
        match self {
            Axis::Right => 0,
            Axis::Up => 1,
            Axis::Forward => 2,
        }
    }

    /// Red, green and blue for right, up and forward.
    pub fn color(&self) -> [Float; 3] {
        match self {
            Axis::Right => [1.0, 0.0, 0.0],
            Axis::Up => [0.0, 1.0, 0.0],
            Axis::Forward => [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: Point3f,
    pub to: Point3f,
    pub axis: Axis,
}

/// Basis vectors and origin of `m`: `(right, up, forward, origin)`.
pub fn basis(m: &Matrix4x4) -> (Vector3f, Vector3f, Vector3f, Point3f) {
    let right = m.transform_vector(&Vector3f::right());
    let up = m.transform_vector(&Vector3f::up());
    let forward = m.transform_vector(&Vector3f::forward());
    return (right, up, forward, translation(m));
}

// Start corner of each edge as signs along (right, up, forward). The edge runs
// to the corner with the sign of its own axis flipped to +.
const CUBE_EDGES: [(Axis, [Float; 3]); 12] = [
    (Axis::Right, [-1.0, -1.0, -1.0]),
    (Axis::Right, [-1.0, 1.0, -1.0]),
    (Axis::Right, [-1.0, -1.0, 1.0]),
    (Axis::Right, [-1.0, 1.0, 1.0]),
    (Axis::Up, [-1.0, -1.0, 1.0]),
    (Axis::Up, [1.0, -1.0, 1.0]),
    (Axis::Up, [-1.0, -1.0, -1.0]),
    (Axis::Up, [1.0, -1.0, -1.0]),
    (Axis::Forward, [-1.0, 1.0, -1.0]),
    (Axis::Forward, [-1.0, -1.0, -1.0]),
    (Axis::Forward, [1.0, 1.0, -1.0]),
    (Axis::Forward, [1.0, -1.0, -1.0]),
];

/// The twelve edges of the unit cube centred on the translation of `m` and
/// spanned by its basis, four per axis.
pub fn cube_edges(m: &Matrix4x4) -> [Edge; 12] {
    let (right, up, forward, origin) = basis(m);
    let corner = |s: &[Float; 3]| -> Point3f {
        origin + right * (s[0] * 0.5) + up * (s[1] * 0.5) + forward * (s[2] * 0.5)
    };
    CUBE_EDGES.map(|(axis, start)| {
        let mut end = start;
        end[axis.index()] = 1.0;
        Edge {
            from: corner(&start),
            to: corner(&end),
            axis,
        }
    })
}
