use super::*;
use linear_algebra::Matrix;
use nalgebra::{Matrix2, Vector2};
use std::ops::Mul;

/// A 2x2 rotation matrix for planar chains.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation2(pub Matrix2<f64>);

impl Rotation2 {
    /// `[[cos, -sin], [sin, cos]]` for `theta` in radians.
    pub fn new(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self(Matrix2::new(c, -s, s, c))
    }

    /// The rotation angle in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.0[(1, 0)].atan2(self.0[(0, 0)])
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    pub fn is_orthonormal(&self, tol: f64) -> bool {
        let error = self.0 * self.0.transpose() - Matrix2::identity();
        error.amax() < tol
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(self.0)
    }
}

impl RotationTrait for Rotation2 {
    type Vector = Vector2<f64>;

    fn rotate(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.0 * v
    }

    fn transform(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        Self(self.0.transpose())
    }

    fn identity() -> Self {
        Self(Matrix2::identity())
    }
}

impl Mul<Rotation2> for Rotation2 {
    type Output = Rotation2;

    fn mul(self, rhs: Rotation2) -> Rotation2 {
        Rotation2(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    const TOL: f64 = 1e-12;

    #[test]
    fn test_rotation2_elements() {
        let r = Rotation2::new(PI / 6.0);
        assert_abs_diff_eq!(r.0[(0, 0)], (PI / 6.0).cos(), epsilon = TOL);
        assert_abs_diff_eq!(r.0[(0, 1)], -(PI / 6.0).sin(), epsilon = TOL);
        assert_abs_diff_eq!(r.0[(1, 0)], (PI / 6.0).sin(), epsilon = TOL);
        assert_abs_diff_eq!(r.0[(1, 1)], (PI / 6.0).cos(), epsilon = TOL);
    }

    #[test]
    fn test_rotation2_quarter_turn() {
        let v = Rotation2::new(FRAC_PI_2).rotate(Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_rotation2_composition_adds_angles() {
        let r = Rotation2::new(0.4) * Rotation2::new(0.9);
        assert_abs_diff_eq!(r.angle(), 1.3, epsilon = TOL);
    }

    #[test]
    fn test_rotation2_proper_for_many_angles() {
        for k in -36..=36 {
            let r = Rotation2::new(k as f64 * 10f64.to_radians());
            assert!(r.is_orthonormal(TOL));
            assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_rotation2_inverse() {
        let r = Rotation2::new(2.1);
        let i = r * r.inv();
        assert!((i.0 - Matrix2::identity()).amax() < TOL);
    }
}
