pub mod axes;
pub mod rotation2;
pub mod rotation_matrix;

use thiserror::Error;

pub use axes::{Axis, AxisSequence};
pub use rotation2::Rotation2;
pub use rotation_matrix::RotationMatrix;

pub mod prelude {
    pub use crate::axes::*;
    pub use crate::rotation2::*;
    pub use crate::rotation_matrix::*;
    pub use crate::{RotationErrors, RotationTrait};
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RotationErrors {
    #[error("axis sequence has {axes} axes but {angles} angles were given")]
    SequenceLength { axes: usize, angles: usize },
    #[error("unknown axis '{0}', expected one of x, y, z")]
    UnknownAxis(String),
}

/// Trait defining rotation and transformation operations.
pub trait RotationTrait {
    type Vector;

    /// Rotates a vector by the rotation.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be rotated.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    fn rotate(&self, v: Self::Vector) -> Self::Vector;

    /// Transforms a vector by the inverse of the rotation, i.e. expresses
    /// a vector given in the outer frame in the inner frame.
    fn transform(&self, v: Self::Vector) -> Self::Vector;

    fn inv(&self) -> Self;

    fn identity() -> Self;
}
