use super::*;
use crate::axes::{Axis, AxisSequence};
use linear_algebra::Matrix;
use nalgebra::{Matrix3, Vector3};
use std::ops::Mul;

/// A struct representing a 3x3 rotation matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationMatrix(pub Matrix3<f64>);

impl RotationMatrix {
    /// Rotation of `angle` radians about the x axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c))
    }

    /// Rotation of `angle` radians about the y axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c))
    }

    /// Rotation of `angle` radians about the z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn about(axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => Self::rotation_x(angle),
            Axis::Y => Self::rotation_y(angle),
            Axis::Z => Self::rotation_z(angle),
        }
    }

    /// Composes the per-axis rotations left to right:
    /// `R(axes[0], angles[0]) * R(axes[1], angles[1]) * ...`.
    pub fn from_axis_sequence(
        sequence: &AxisSequence,
        angles: &[f64],
    ) -> Result<Self, RotationErrors> {
        if sequence.len() != angles.len() {
            return Err(RotationErrors::SequenceLength {
                axes: sequence.len(),
                angles: angles.len(),
            });
        }
        Ok(sequence
            .axes()
            .iter()
            .zip(angles)
            .fold(Self::identity(), |acc, (axis, angle)| {
                acc * Self::about(*axis, *angle)
            }))
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// True when `R * R^T` is within `tol` of the identity, element-wise.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        let error = self.0 * self.0.transpose() - Matrix3::identity();
        error.amax() < tol
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(self.0)
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(value)
    }
}

impl RotationTrait for RotationMatrix {
    type Vector = Vector3<f64>;

    /// Rotates a vector by the rotation matrix.
    fn rotate(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    /// Transforms a vector by the transpose of the rotation matrix.
    fn transform(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        RotationMatrix::from(self.0.transpose())
    }

    /// Creates an identity `RotationMatrix`.
    fn identity() -> Self {
        Self(Matrix3::identity())
    }
}

impl Mul<RotationMatrix> for RotationMatrix {
    type Output = RotationMatrix;

    /// Multiplies two rotation matrices. The right-hand side is applied first.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix::from(self.0 * rhs.0)
    }
}
