use super::determinant::*;
use super::interpolate::*;
use super::matrix4x4::*;
use crate::core::base::*;

use log::*;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use serde::{Deserialize, Serialize};

/// One evaluated point of a session.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub time: Float,
    pub matrix: Matrix4x4,
    pub determinant: Float,
}

/// The pair of endpoint transforms and flags a caller keeps between updates.
///
/// `a` and `b` must not change while sweeping `time`: the long-path branch
/// is chosen from their relative rotation, and swapping an endpoint midway
/// makes the path jump.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct InterpolationSession {
    pub a: Matrix4x4,
    pub b: Matrix4x4,
    pub flags: InterpolationFlags,
}

impl InterpolationSession {
    pub fn new(a: &Matrix4x4, b: &Matrix4x4, flags: &InterpolationFlags) -> Self {
        InterpolationSession {
            a: *a,
            b: *b,
            flags: *flags,
        }
    }

    pub fn request(&self, time: Float) -> InterpolationRequest {
        InterpolationRequest::new(&self.a, &self.b, time, &self.flags)
    }

    /// Evaluates the session at `time`, clamped to [0, 1].
    pub fn evaluate(&self, time: Float) -> Frame {
        let t = Float::clamp(time, 0.0, 1.0);
        if t != time {
            warn!("time {} clamped to {}", time, t);
        }
        let matrix = self.request(t).interpolate();
        let determinant = determinant(&matrix);
        Frame {
            time: t,
            matrix,
            determinant,
        }
    }

    /// Evaluates `steps + 1` evenly spaced times from 0 to 1 in parallel.
    ///
    /// At least one step is taken, so both endpoints are always present:
    /// `sweep(0)` returns the same two frames as `sweep(1)`.
    pub fn sweep(&self, steps: usize) -> Vec<Frame> {
        if steps == 0 {
            debug!("sweep of 0 steps raised to 1");
        }
        let steps = usize::max(1, steps);
        debug!("sweeping {} steps", steps);
        (0..=steps)
            .into_par_iter()
            .map(|i| {
                // The last step lands exactly on 1.0 to hit the endpoint fast path.
                let t = if i == steps {
                    1.0
                } else {
                    i as Float / steps as Float
                };
                self.evaluate(t)
            })
            .collect()
    }
}

impl From<&InterpolationRequest> for InterpolationSession {
    fn from(req: &InterpolationRequest) -> Self {
        InterpolationSession::new(&req.a, &req.b, &req.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = Matrix4x4::identity();
        let b = Matrix4x4::translate(4.0, 0.0, 0.0);
        let session = InterpolationSession::new(&a, &b, &InterpolationFlags::all());
        let frames = session.sweep(4);
        assert_eq!(frames.len(), 5);
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(f.time, i as Float / 4.0);
            assert_eq!(f.matrix.get(0, 3), i as Float);
            assert!((f.determinant - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_002() {
        let a = Matrix4x4::identity();
        let b = Matrix4x4::translate(1.0, 0.0, 0.0);
        let session = InterpolationSession::new(&a, &b, &InterpolationFlags::all());
        let f = session.evaluate(3.0);
        assert_eq!(f.time, 1.0);
        assert_eq!(f.matrix, session.evaluate(1.0).matrix);
        assert_eq!(session.sweep(0).len(), 2);
    }

    #[test]
    fn test_003() {
        let a = Matrix4x4::identity();
        let b = Matrix4x4::translate(0.0, 2.0, 0.0) * Matrix4x4::rotate_x(60.0);
        let session = InterpolationSession::new(&a, &b, &InterpolationFlags::all());
        let zero = session.sweep(0);
        assert_eq!(zero, session.sweep(1));
        assert_eq!(zero[0].time, 0.0);
        assert_eq!(zero[1].time, 1.0);
        assert_eq!(zero[1].matrix, session.evaluate(1.0).matrix);
    }
}
