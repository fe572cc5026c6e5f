use crate::{KinematicsErrors, check_dimensions};
use serde::{Deserialize, Serialize};

/// Ordered link lengths, base first. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct LinkSet(Vec<f64>);

impl LinkSet {
    pub fn new(lengths: Vec<f64>) -> Result<Self, KinematicsErrors> {
        for (index, value) in lengths.iter().enumerate() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(KinematicsErrors::InvalidLinkLength {
                    index,
                    value: *value,
                });
            }
        }
        Ok(Self(lengths))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lengths(&self) -> &[f64] {
        &self.0
    }

    /// Reach of the fully extended arm.
    pub fn total_length(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl TryFrom<Vec<f64>> for LinkSet {
    type Error = KinematicsErrors;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        LinkSet::new(value)
    }
}

impl From<LinkSet> for Vec<f64> {
    fn from(value: LinkSet) -> Self {
        value.0
    }
}

/// Joint angles in radians, one per link.
///
/// Non-finite angles are rejected on construction so they never reach
/// the trigonometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JointAngles(Vec<f64>);

impl JointAngles {
    pub fn from_radians(radians: Vec<f64>) -> Result<Self, KinematicsErrors> {
        for (index, value) in radians.iter().enumerate() {
            if !value.is_finite() {
                return Err(KinematicsErrors::InvalidAngle {
                    index,
                    value: *value,
                });
            }
        }
        Ok(Self(radians))
    }

    pub fn from_degrees(degrees: &[f64]) -> Result<Self, KinematicsErrors> {
        // check before converting so the error reports the caller's value
        for (index, value) in degrees.iter().enumerate() {
            if !value.is_finite() {
                return Err(KinematicsErrors::InvalidAngle {
                    index,
                    value: *value,
                });
            }
        }
        Ok(Self(degrees.iter().map(|d| d.to_radians()).collect()))
    }

    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn radians(&self) -> &[f64] {
        &self.0
    }

    pub fn degrees(&self) -> Vec<f64> {
        self.0.iter().map(|r| r.to_degrees()).collect()
    }
}

/// The arm model owned by a frame driver: fixed links plus the angles of
/// the current frame. Angles are only ever replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmModel {
    links: LinkSet,
    angles: JointAngles,
}

impl ArmModel {
    /// A new arm with every joint at zero.
    pub fn new(links: LinkSet) -> Self {
        let angles = JointAngles::zeros(links.len());
        Self { links, angles }
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    pub fn set_angles(&mut self, angles: JointAngles) -> Result<(), KinematicsErrors> {
        check_dimensions(&self.links, &angles)?;
        self.angles = angles;
        Ok(())
    }

    pub fn set_angles_degrees(&mut self, degrees: &[f64]) -> Result<(), KinematicsErrors> {
        self.set_angles(JointAngles::from_degrees(degrees)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    const TOL: f64 = 1e-12;

    #[test]
    fn test_link_set_rejects_bad_lengths() {
        assert_eq!(
            LinkSet::new(vec![1.0, 0.0]),
            Err(KinematicsErrors::InvalidLinkLength {
                index: 1,
                value: 0.0
            })
        );
        assert!(LinkSet::new(vec![-1.0]).is_err());
        assert!(LinkSet::new(vec![f64::INFINITY]).is_err());
        assert!(LinkSet::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_link_set_total_length() {
        let links = LinkSet::new(vec![3.0, 2.0, 1.0]).unwrap();
        assert_eq!(links.total_length(), 6.0);
    }

    #[test]
    fn test_joint_angles_degrees_round_trip() {
        let angles = JointAngles::from_degrees(&[90.0, -45.0]).unwrap();
        assert_abs_diff_eq!(angles.radians()[0], std::f64::consts::FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(angles.degrees()[1], -45.0, epsilon = TOL);
    }

    #[test]
    fn test_joint_angles_reject_non_finite() {
        let err = JointAngles::from_degrees(&[0.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, KinematicsErrors::InvalidAngle { index: 1, .. }));
        let err = JointAngles::from_radians(vec![f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, KinematicsErrors::InvalidAngle { index: 0, .. }));
    }

    #[test]
    fn test_arm_model_replaces_angles_wholesale() {
        let mut arm = ArmModel::new(LinkSet::new(vec![3.0, 2.0, 1.0]).unwrap());
        assert_eq!(arm.angles(), &JointAngles::zeros(3));

        arm.set_angles_degrees(&[10.0, 20.0, 30.0]).unwrap();
        assert_abs_diff_eq!(arm.angles().degrees()[2], 30.0, epsilon = TOL);

        let err = arm.set_angles_degrees(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, KinematicsErrors::DimensionMismatch { links: 3, angles: 2 });
        // a rejected update leaves the previous frame untouched
        assert_abs_diff_eq!(arm.angles().degrees()[0], 10.0, epsilon = TOL);
    }

    #[test]
    fn test_link_set_deserialize_validates() {
        let links: Result<LinkSet, _> = ron::from_str("[2.5, 2.0, 1.5]");
        assert_eq!(links.unwrap().lengths(), &[2.5, 2.0, 1.5]);
        let bad: Result<LinkSet, _> = ron::from_str("[2.5, -1.0]");
        assert!(bad.is_err());
    }
}
