use crate::RotationErrors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Principal axis a revolute joint rotates about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Axis {
    type Err = RotationErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(RotationErrors::UnknownAxis(s.to_string())),
        }
    }
}

/// Ordered list of joint axes, one per joint, base first.
///
/// Rotations are composed left to right in the order given, so the
/// sequence `[Z, Y, X]` yields `Rz(a1) * Ry(a2) * Rx(a3)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSequence(Vec<Axis>);

impl AxisSequence {
    pub fn new(axes: Vec<Axis>) -> Self {
        Self(axes)
    }

    /// Yaw, pitch, roll: `[Z, Y, X]`.
    pub fn zyx() -> Self {
        Self(vec![Axis::Z, Axis::Y, Axis::X])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.0
    }
}

impl FromStr for AxisSequence {
    type Err = RotationErrors;

    /// Parses compact sequences such as `"zyx"` or separated ones such as `"z,y,x"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_string().parse::<Axis>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for AxisSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in &self.0 {
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}
