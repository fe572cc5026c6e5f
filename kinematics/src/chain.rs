use crate::report::{TransformReport, analyze_transform};
use crate::spatial::Pose3D;
use crate::{JointAngles, KinematicsErrors, LinkSet, check_dimensions};
use nalgebra::{Point3, Vector3};
use rotations::{AxisSequence, RotationMatrix, RotationTrait};

/// A spatial serial chain of any length where every joint rotates about
/// an explicitly configured axis.
///
/// Link `i` lies along the local x axis of the frame
/// `R(axis_1, a1) * ... * R(axis_i, ai)`, and its end is added to the
/// previous joint position. With axes `[Z, Y, X]` and three links this is
/// the fixed arm of [`crate::spatial`].
#[derive(Debug, Clone, PartialEq)]
pub struct SerialChain {
    links: LinkSet,
    axes: AxisSequence,
}

/// Result of evaluating a [`SerialChain`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSolution {
    pub pose: Pose3D,
    /// Cumulative orientation of each link, base first.
    pub rotations: Vec<RotationMatrix>,
}

impl ChainSolution {
    /// Orientation of the last link, identity for an empty chain.
    pub fn total_rotation(&self) -> RotationMatrix {
        self.rotations
            .last()
            .copied()
            .unwrap_or_else(RotationMatrix::identity)
    }

    pub fn end_effector(&self) -> Point3<f64> {
        self.pose.end_effector()
    }

    pub fn report(&self) -> TransformReport {
        analyze_transform(&self.total_rotation(), &self.end_effector())
    }
}

impl SerialChain {
    pub fn new(links: LinkSet, axes: AxisSequence) -> Result<Self, KinematicsErrors> {
        if links.len() != axes.len() {
            return Err(KinematicsErrors::AxisCountMismatch {
                links: links.len(),
                axes: axes.len(),
            });
        }
        Ok(Self { links, axes })
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub fn axes(&self) -> &AxisSequence {
        &self.axes
    }

    pub fn compute(&self, angles: &JointAngles) -> Result<ChainSolution, KinematicsErrors> {
        check_dimensions(&self.links, angles)?;

        let mut points = Vec::with_capacity(self.links.len() + 1);
        let mut rotations = Vec::with_capacity(self.links.len());
        let mut orientation = RotationMatrix::identity();
        let mut position = Point3::origin();
        points.push(position);

        for ((axis, length), theta) in self
            .axes
            .axes()
            .iter()
            .zip(self.links.lengths())
            .zip(angles.radians())
        {
            orientation = orientation * RotationMatrix::about(*axis, *theta);
            position += orientation.rotate(Vector3::new(*length, 0.0, 0.0));
            rotations.push(orientation);
            points.push(position);
        }

        Ok(ChainSolution {
            pose: Pose3D(points),
            rotations,
        })
    }
}
