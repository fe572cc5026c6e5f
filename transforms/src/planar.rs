use linear_algebra::Matrix;
use nalgebra::{Matrix3, Vector2, Vector3};
use rotations::{Rotation2, RotationTrait};
use std::ops::Mul;

/// A 3x3 homogeneous transform for the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2(pub Matrix3<f64>);

impl Transform2 {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Pure translation
    /// ```text
    /// [[1, 0, x],
    ///  [0, 1, y],
    ///  [0, 0, 1]]
    /// ```
    pub fn translation(x: f64, y: f64) -> Self {
        Self(Matrix3::new(1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0))
    }

    /// Pure rotation of `theta` radians about the origin.
    pub fn rotation(theta: f64) -> Self {
        Self::from_parts(Rotation2::new(theta), Vector2::zeros())
    }

    pub fn from_parts(rotation: Rotation2, translation: Vector2<f64>) -> Self {
        let r = rotation.0;
        Self(Matrix3::new(
            r[(0, 0)],
            r[(0, 1)],
            translation.x,
            r[(1, 0)],
            r[(1, 1)],
            translation.y,
            0.0,
            0.0,
            1.0,
        ))
    }

    pub fn rotation_part(&self) -> Rotation2 {
        Rotation2(self.0.fixed_view::<2, 2>(0, 0).into_owned())
    }

    pub fn translation_part(&self) -> Vector2<f64> {
        Vector2::new(self.0[(0, 2)], self.0[(1, 2)])
    }

    /// Maps a point through the transform.
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        let h = self.0 * Vector3::new(p.x, p.y, 1.0);
        Vector2::new(h.x, h.y)
    }

    /// Rigid inverse: `[R^T, -R^T t]`.
    pub fn inv(&self) -> Self {
        let rotation = self.rotation_part().inv();
        let translation = -rotation.rotate(self.translation_part());
        Self::from_parts(rotation, translation)
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(self.0)
    }
}

impl From<Rotation2> for Transform2 {
    fn from(rotation: Rotation2) -> Self {
        Self::from_parts(rotation, Vector2::zeros())
    }
}

impl Mul<Transform2> for Transform2 {
    type Output = Transform2;

    fn mul(self, rhs: Transform2) -> Transform2 {
        Transform2(self.0 * rhs.0)
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}
