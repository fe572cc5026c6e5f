use linear_algebra::Matrix;
use nalgebra::{Matrix4, Vector3, Vector4};
use rotations::{RotationMatrix, RotationTrait};
use std::ops::Mul;

/// A 4x4 homogeneous transform: rotation block, translation column and a
/// `[0, 0, 0, 1]` bottom row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3(pub Matrix4<f64>);

impl Transform3 {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::from_parts(RotationMatrix::identity(), Vector3::new(x, y, z))
    }

    pub fn from_parts(rotation: RotationMatrix, translation: Vector3<f64>) -> Self {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation.0);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        Self(m)
    }

    pub fn rotation_part(&self) -> RotationMatrix {
        RotationMatrix(self.0.fixed_view::<3, 3>(0, 0).into_owned())
    }

    pub fn translation_part(&self) -> Vector3<f64> {
        self.0.fixed_view::<3, 1>(0, 3).into_owned()
    }

    pub fn apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        let h = self.0 * Vector4::new(p.x, p.y, p.z, 1.0);
        Vector3::new(h.x, h.y, h.z)
    }

    pub fn inv(&self) -> Self {
        let rotation = self.rotation_part().inv();
        let translation = -rotation.rotate(self.translation_part());
        Self::from_parts(rotation, translation)
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(self.0)
    }
}

impl Mul<Transform3> for Transform3 {
    type Output = Transform3;

    fn mul(self, rhs: Transform3) -> Transform3 {
        Transform3(self.0 * rhs.0)
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}
