use super::interpolate::*;
use super::matrix4x4::*;
use crate::core::base::*;
use crate::core::error::*;

pub const DEFAULT_TOLERANCE: Float = 1e-4;

/// Checks that `m` is something `decompose` can split faithfully: bottom row
/// `(0, 0, 0, 1)`, non-degenerate basis columns and no shear.
pub fn check_affine(m: &Matrix4x4, eps: Float) -> Result<(), TransformError> {
    let bottom = [m.get(3, 0), m.get(3, 1), m.get(3, 2), m.get(3, 3) - 1.0];
    if bottom.iter().any(|v| v.abs() > eps) {
        let msg = format!(
            "Bottom row is not (0, 0, 0, 1): {:?}",
            [m.get(3, 0), m.get(3, 1), m.get(3, 2), m.get(3, 3)]
        );
        return Err(TransformError::warning(&msg));
    }

    let columns = [m.column(0), m.column(1), m.column(2)];
    for (i, c) in columns.iter().enumerate() {
        if c.length() < eps {
            let msg = format!("Basis column {} is degenerate.", i);
            return Err(TransformError::warning(&msg));
        }
    }

    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        let a = columns[i].normalize();
        let b = columns[j].normalize();
        let d = a.dot(&b);
        if d.abs() > eps {
            let msg = format!("Basis columns {} and {} are not orthogonal (shear {}).", i, j, d);
            return Err(TransformError::warning(&msg));
        }
    }
    return Ok(());
}

impl InterpolationRequest {
    pub fn validate(&self) -> Result<(), TransformError> {
        if !(0.0..=1.0).contains(&self.time) {
            let msg = format!("Time {} is outside [0, 1].", self.time);
            return Err(TransformError::warning(&msg));
        }
        check_affine(&self.a, DEFAULT_TOLERANCE)
            .map_err(|e| TransformError::warning(&format!("Matrix A: {}", e.msg)))?;
        check_affine(&self.b, DEFAULT_TOLERANCE)
            .map_err(|e| TransformError::warning(&format!("Matrix B: {}", e.msg)))?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let m = Matrix4x4::translate(1.0, 2.0, 3.0)
            * Matrix4x4::rotate(20.0, 1.0, 2.0, 3.0)
            * Matrix4x4::scale(1.0, 4.0, 0.5);
        assert!(check_affine(&m, DEFAULT_TOLERANCE).is_ok());
    }

    #[test]
    fn test_002() {
        let mut m = Matrix4x4::identity();
        m.m[1] = 0.5; // x leaks into the up column
        let e = check_affine(&m, DEFAULT_TOLERANCE).unwrap_err();
        assert!(e.is_warning());
        assert!(e.msg.contains("orthogonal"), "{}", e.msg);
    }

    #[test]
    fn test_003() {
        let m = Matrix4x4::scale(1.0, 0.0, 1.0);
        assert!(check_affine(&m, DEFAULT_TOLERANCE).is_err());

        let mut m = Matrix4x4::identity();
        m.m[12] = 1.0;
        assert!(check_affine(&m, DEFAULT_TOLERANCE).is_err());
    }

    #[test]
    fn test_004() {
        let mut req = InterpolationRequest::default();
        assert!(req.validate().is_ok());
        req.time = 1.5;
        assert!(req.validate().is_err());
        req.time = 0.5;
        req.b = Matrix4x4::scale(0.0, 0.0, 0.0);
        let e = req.validate().unwrap_err();
        assert!(e.msg.starts_with("Matrix B"), "{}", e.msg);
    }
}
