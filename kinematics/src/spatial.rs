//! Fixed three link spatial arm.
//!
//! Joint 1 yaws about z, joint 2 pitches about y, joint 3 rolls about x,
//! and every link lies along the local x axis of its frame:
//!
//! ```text
//! p1 = Rz(a1)                 * [L1, 0, 0]
//! p2 = Rz(a1) Ry(a2)          * [L2, 0, 0] + p1
//! p3 = Rz(a1) Ry(a2) Rx(a3)   * [L3, 0, 0] + p2
//! ```
//!
//! This is a specialization to exactly three links with a z-y-x axis
//! assignment. [`crate::chain::SerialChain`] covers other layouts with
//! explicitly configured axes.

use crate::report::{TransformReport, analyze_transform};
use crate::{JointAngles, KinematicsErrors, LinkSet, check_dimensions};
use nalgebra::{Point3, Vector3};
use rotations::{RotationMatrix, RotationTrait};

/// Number of links of the spatial arm.
pub const SPATIAL_LINKS: usize = 3;

/// Joint positions of a spatial arm, base first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose3D(pub(crate) Vec<Point3<f64>>);

impl Pose3D {
    pub fn points(&self) -> &[Point3<f64>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn base(&self) -> Point3<f64> {
        self.0[0]
    }

    pub fn end_effector(&self) -> Point3<f64> {
        self.0[self.0.len() - 1]
    }
}

/// Result of one spatial forward kinematics evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSolution {
    pub pose: Pose3D,
    /// Cumulative orientation of each link: `Rz`, `Rz Ry`, `Rz Ry Rx`.
    pub rotations: [RotationMatrix; SPATIAL_LINKS],
    /// The individual joint rotations `Rz(a1)`, `Ry(a2)`, `Rx(a3)`.
    pub joint_rotations: [RotationMatrix; SPATIAL_LINKS],
    /// Joint angles of this evaluation, radians.
    pub angles: [f64; SPATIAL_LINKS],
}

impl SpatialSolution {
    /// `Rz(a1) * Ry(a2) * Rx(a3)`.
    pub fn total_rotation(&self) -> RotationMatrix {
        self.rotations[SPATIAL_LINKS - 1]
    }

    pub fn end_effector(&self) -> Point3<f64> {
        self.pose.end_effector()
    }

    /// Diagnostics of the composed rotation placed at the end effector.
    pub fn report(&self) -> TransformReport {
        analyze_transform(&self.total_rotation(), &self.end_effector())
    }
}

pub fn compute(links: &LinkSet, angles: &JointAngles) -> Result<SpatialSolution, KinematicsErrors> {
    if links.len() != SPATIAL_LINKS {
        return Err(KinematicsErrors::UnsupportedLinkCount {
            expected: SPATIAL_LINKS,
            found: links.len(),
        });
    }
    check_dimensions(links, angles)?;

    let l = links.lengths();
    let a = angles.radians();

    let rz = RotationMatrix::rotation_z(a[0]);
    let ry = RotationMatrix::rotation_y(a[1]);
    let rx = RotationMatrix::rotation_x(a[2]);

    let r1 = rz;
    let r2 = rz * ry;
    let r3 = rz * ry * rx;

    let p0 = Point3::origin();
    let p1 = p0 + r1.rotate(Vector3::new(l[0], 0.0, 0.0));
    let p2 = p1 + r2.rotate(Vector3::new(l[1], 0.0, 0.0));
    let p3 = p2 + r3.rotate(Vector3::new(l[2], 0.0, 0.0));

    Ok(SpatialSolution {
        pose: Pose3D(vec![p0, p1, p2, p3]),
        rotations: [r1, r2, r3],
        joint_rotations: [rz, ry, rx],
        angles: [a[0], a[1], a[2]],
    })
}

/// Spatial forward kinematics followed by the transform diagnostics of
/// the composed rotation.
pub fn analyze_frame(
    links: &LinkSet,
    angles: &JointAngles,
) -> Result<TransformReport, KinematicsErrors> {
    Ok(compute(links, angles)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    const TOL: f64 = 1e-12;

    fn links() -> LinkSet {
        LinkSet::new(vec![2.5, 2.0, 1.5]).unwrap()
    }

    #[test]
    fn test_zero_angles_extend_along_x() {
        let solution = compute(&links(), &JointAngles::zeros(3)).unwrap();
        let expected = [0.0, 2.5, 4.5, 6.0];
        assert_eq!(solution.pose.len(), 4);
        for (p, x) in solution.pose.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = TOL);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = TOL);
            assert_abs_diff_eq!(p.z, 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_yaw_rotates_whole_chain() {
        let angles = JointAngles::from_degrees(&[90.0, 0.0, 0.0]).unwrap();
        let end = compute(&links(), &angles).unwrap().end_effector();
        assert_abs_diff_eq!(end.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(end.y, 6.0, epsilon = TOL);
        assert_abs_diff_eq!(end.z, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_pitch_lifts_outer_links() {
        // positive pitch about y tips the local x axis towards -z
        let angles = JointAngles::from_degrees(&[0.0, 90.0, 0.0]).unwrap();
        let pose = compute(&links(), &angles).unwrap().pose;
        let p1 = pose.points()[1];
        let p3 = pose.points()[3];
        assert_abs_diff_eq!(p1.x, 2.5, epsilon = TOL);
        assert_abs_diff_eq!(p3.x, 2.5, epsilon = TOL);
        assert_abs_diff_eq!(p3.z, -3.5, epsilon = TOL);
    }

    #[test]
    fn test_roll_does_not_move_last_joint_along_its_axis() {
        // the last link lies on its own roll axis
        let l = links();
        let a = compute(&l, &JointAngles::from_degrees(&[20.0, 30.0, 0.0]).unwrap()).unwrap();
        let b = compute(&l, &JointAngles::from_degrees(&[20.0, 30.0, 75.0]).unwrap()).unwrap();
        assert!((a.end_effector() - b.end_effector()).norm() < TOL);
        assert!((a.total_rotation().0 - b.total_rotation().0).amax() > 1e-3);
    }

    #[test]
    fn test_rotations_are_cumulative() {
        let angles = JointAngles::from_degrees(&[30.0, 20.0, 10.0]).unwrap();
        let s = compute(&links(), &angles).unwrap();
        let [rz, ry, rx] = s.joint_rotations;
        assert_eq!(s.rotations[0], rz);
        assert!((s.rotations[1].0 - (rz * ry).0).amax() < TOL);
        assert!((s.total_rotation().0 - (rz * ry * rx).0).amax() < TOL);
    }

    #[test]
    fn test_composition_order_matters() {
        let l = links();
        let a = compute(&l, &JointAngles::from_degrees(&[30.0, 20.0, 10.0]).unwrap()).unwrap();
        let b = compute(&l, &JointAngles::from_degrees(&[10.0, 20.0, 30.0]).unwrap()).unwrap();
        assert!((a.end_effector() - b.end_effector()).norm() > 1e-3);
    }

    #[test]
    fn test_dimension_mismatch() {
        let angles = JointAngles::from_degrees(&[10.0, 20.0]).unwrap();
        assert_eq!(
            compute(&links(), &angles),
            Err(KinematicsErrors::DimensionMismatch { links: 3, angles: 2 })
        );
    }

    #[test]
    fn test_unsupported_link_count() {
        let l = LinkSet::new(vec![1.0, 1.0]).unwrap();
        assert_eq!(
            compute(&l, &JointAngles::zeros(2)),
            Err(KinematicsErrors::UnsupportedLinkCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_angles_are_kept_in_radians() {
        let angles = JointAngles::from_degrees(&[90.0, 0.0, -45.0]).unwrap();
        let s = compute(&links(), &angles).unwrap();
        assert_abs_diff_eq!(s.angles[0], std::f64::consts::FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(s.angles[2], -std::f64::consts::FRAC_PI_4, epsilon = TOL);
    }
}
