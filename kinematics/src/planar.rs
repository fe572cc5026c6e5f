//! Planar serial chain. Each joint angle is measured relative to the
//! previous link, so link `i` points along the cumulative angle
//! `a1 + ... + ai` in the world frame.

use crate::{JointAngles, KinematicsErrors, LinkSet, check_dimensions};
use nalgebra::{Point2, Vector2};
use rotations::{Rotation2, RotationTrait};
use transforms::Transform2;

/// Joint positions of a planar arm: the base at the origin followed by the
/// end of every link. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose2D(Vec<Point2<f64>>);

impl Pose2D {
    pub fn points(&self) -> &[Point2<f64>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn base(&self) -> Point2<f64> {
        self.0[0]
    }

    /// Terminal point of the last link (the base for a zero link arm).
    pub fn end_effector(&self) -> Point2<f64> {
        self.0[self.0.len() - 1]
    }
}

/// Orientation and position at the end of one link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFrame {
    /// 1-based joint number.
    pub joint: usize,
    /// Sum of the joint angles up to and including this joint, radians.
    pub cumulative_angle: f64,
    pub rotation: Rotation2,
    pub position: Point2<f64>,
}

/// Joint positions for the given links and relative joint angles.
pub fn compute(links: &LinkSet, angles: &JointAngles) -> Result<Pose2D, KinematicsErrors> {
    Ok(compute_with_frames(links, angles)?.0)
}

/// The pose together with the frames it was built from, in a single walk
/// of the chain.
pub fn compute_with_frames(
    links: &LinkSet,
    angles: &JointAngles,
) -> Result<(Pose2D, Vec<PlanarFrame>), KinematicsErrors> {
    let frames = compute_frames(links, angles)?;
    let mut points = Vec::with_capacity(frames.len() + 1);
    points.push(Point2::origin());
    points.extend(frames.iter().map(|f| f.position));
    Ok((Pose2D(points), frames))
}

/// Per-joint cumulative angle, rotation and partial coordinate.
pub fn compute_frames(
    links: &LinkSet,
    angles: &JointAngles,
) -> Result<Vec<PlanarFrame>, KinematicsErrors> {
    check_dimensions(links, angles)?;

    let mut frames = Vec::with_capacity(links.len());
    let mut cumulative_angle = 0.0;
    let mut position = Point2::origin();

    for (i, (length, theta)) in links.lengths().iter().zip(angles.radians()).enumerate() {
        cumulative_angle += theta;
        let rotation = Rotation2::new(cumulative_angle);
        position += rotation.rotate(Vector2::new(*length, 0.0));
        frames.push(PlanarFrame {
            joint: i + 1,
            cumulative_angle,
            rotation,
            position,
        });
    }

    Ok(frames)
}

/// Homogeneous base-from-link transforms, built by chaining
/// `T_i = T_{i-1} * R(a_i) * D(L_i, 0)`.
pub fn compute_transforms(
    links: &LinkSet,
    angles: &JointAngles,
) -> Result<Vec<Transform2>, KinematicsErrors> {
    check_dimensions(links, angles)?;

    let mut current = Transform2::identity();
    Ok(links
        .lengths()
        .iter()
        .zip(angles.radians())
        .map(|(length, theta)| {
            current = current * Transform2::rotation(*theta) * Transform2::translation(*length, 0.0);
            current
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    const TOL: f64 = 1e-12;

    fn links(lengths: &[f64]) -> LinkSet {
        LinkSet::new(lengths.to_vec()).unwrap()
    }

    fn assert_points(pose: &Pose2D, expected: &[(f64, f64)]) {
        assert_eq!(pose.len(), expected.len());
        for (p, (x, y)) in pose.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.x, *x, epsilon = TOL);
            assert_abs_diff_eq!(p.y, *y, epsilon = TOL);
        }
    }

    #[test]
    fn test_zero_angles_extend_along_x() {
        let pose = compute(&links(&[3.0, 2.0, 1.0]), &JointAngles::zeros(3)).unwrap();
        assert_points(&pose, &[(0.0, 0.0), (3.0, 0.0), (5.0, 0.0), (6.0, 0.0)]);
    }

    #[test]
    fn test_cumulative_angle() {
        let angles = JointAngles::from_degrees(&[90.0, 0.0, 0.0]).unwrap();
        let pose = compute(&links(&[3.0, 2.0, 1.0]), &angles).unwrap();
        assert_points(&pose, &[(0.0, 0.0), (0.0, 3.0), (0.0, 5.0), (0.0, 6.0)]);
    }

    #[test]
    fn test_angles_are_relative_to_previous_link() {
        // second joint folds the arm back onto the x axis
        let angles = JointAngles::from_degrees(&[90.0, -90.0]).unwrap();
        let pose = compute(&links(&[1.0, 1.0]), &angles).unwrap();
        assert_points(&pose, &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_zero_links_is_just_the_base() {
        let pose = compute(&links(&[]), &JointAngles::zeros(0)).unwrap();
        assert_eq!(pose.points(), &[Point2::<f64>::origin()]);
        assert_eq!(pose.end_effector(), Point2::origin());
    }

    #[test]
    fn test_dimension_mismatch() {
        let angles = JointAngles::from_degrees(&[10.0, 20.0]).unwrap();
        assert_eq!(
            compute(&links(&[3.0, 2.0, 1.0]), &angles),
            Err(KinematicsErrors::DimensionMismatch { links: 3, angles: 2 })
        );
    }

    #[test]
    fn test_frames_report_cumulative_rotation() {
        let angles = JointAngles::from_degrees(&[30.0, 20.0, 10.0]).unwrap();
        let frames = compute_frames(&links(&[3.0, 2.0, 1.0]), &angles).unwrap();
        let expected_deg = [30.0, 50.0, 60.0];
        for (frame, deg) in frames.iter().zip(expected_deg) {
            assert_abs_diff_eq!(frame.cumulative_angle.to_degrees(), deg, epsilon = 1e-9);
            assert_abs_diff_eq!(frame.rotation.angle().to_degrees(), deg, epsilon = 1e-9);
            assert!(frame.rotation.is_orthonormal(TOL));
        }
        assert_eq!(frames.iter().map(|f| f.joint).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pose_is_built_from_frames() {
        let angles = JointAngles::from_degrees(&[90.0, -45.0, 10.0]).unwrap();
        let (pose, frames) = compute_with_frames(&links(&[3.0, 2.0, 1.0]), &angles).unwrap();
        assert_eq!(pose.len(), frames.len() + 1);
        assert_eq!(pose.base(), Point2::origin());
        for (p, frame) in pose.points()[1..].iter().zip(&frames) {
            assert_eq!(*p, frame.position);
        }
        assert_eq!(compute(&links(&[3.0, 2.0, 1.0]), &angles).unwrap(), pose);

        let mismatched = JointAngles::zeros(2);
        assert_eq!(
            compute_with_frames(&links(&[3.0, 2.0, 1.0]), &mismatched),
            Err(KinematicsErrors::DimensionMismatch { links: 3, angles: 2 })
        );
    }

    #[test]
    fn test_homogeneous_chain_matches_cumulative_angles() {
        let l = links(&[3.0, 2.0, 1.0]);
        let angles = JointAngles::from_degrees(&[60.0, 45.0, 25.0]).unwrap();
        let pose = compute(&l, &angles).unwrap();
        let transforms = compute_transforms(&l, &angles).unwrap();
        for (t, p) in transforms.iter().zip(&pose.points()[1..]) {
            let origin = t.apply(Vector2::zeros());
            assert_abs_diff_eq!(origin.x, p.x, epsilon = TOL);
            assert_abs_diff_eq!(origin.y, p.y, epsilon = TOL);
        }
    }
}
