//! Forward kinematics for serial-link manipulators.
//!
//! Two independent engines share the caller-owned arm model
//! ([`LinkSet`] + [`JointAngles`]):
//!
//! * [`planar`] accumulates relative joint angles in the plane.
//! * [`spatial`] composes `Rz(a1) * Ry(a2) * Rx(a3)` for a fixed three link arm,
//!   and [`report`] derives linear algebra diagnostics from the result.
//!
//! [`chain`] generalizes the spatial arm to any number of links with an
//! explicit axis per joint.
//!
//! Every engine function is pure: nothing is cached between calls and
//! nothing is logged.

pub mod arm;
pub mod chain;
pub mod planar;
pub mod report;
pub mod spatial;

pub use arm::{ArmModel, JointAngles, LinkSet};
pub use chain::{ChainSolution, SerialChain};
pub use planar::{PlanarFrame, Pose2D};
pub use report::TransformReport;
pub use spatial::{Pose3D, SpatialSolution};

use linear_algebra::LinearAlgebraErrors;
use thiserror::Error;

pub mod prelude {
    pub use crate::arm::*;
    pub use crate::chain::*;
    pub use crate::planar::{PlanarFrame, Pose2D};
    pub use crate::report::TransformReport;
    pub use crate::spatial::{Pose3D, SpatialSolution};
    pub use crate::KinematicsErrors;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KinematicsErrors {
    #[error("chain has {links} links but {axes} joint axes")]
    AxisCountMismatch { links: usize, axes: usize },
    #[error("expected {links} joint angles (one per link), got {angles}")]
    DimensionMismatch { links: usize, angles: usize },
    #[error("joint angle {index} is not finite ({value})")]
    InvalidAngle { index: usize, value: f64 },
    #[error("link {index} length must be a positive finite number, got {value}")]
    InvalidLinkLength { index: usize, value: f64 },
    #[error("{0}")]
    LinearAlgebra(#[from] LinearAlgebraErrors),
    #[error("this arm supports exactly {expected} links, got {found}")]
    UnsupportedLinkCount { expected: usize, found: usize },
}

/// Fails fast when the angle count does not match the link count.
pub(crate) fn check_dimensions(links: &LinkSet, angles: &JointAngles) -> Result<(), KinematicsErrors> {
    if links.len() != angles.len() {
        return Err(KinematicsErrors::DimensionMismatch {
            links: links.len(),
            angles: angles.len(),
        });
    }
    Ok(())
}
