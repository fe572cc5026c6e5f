//! Text formatting of per-frame diagnostics. Matrices are rounded to three
//! decimals and coordinates to two.

use kinematics::chain::ChainSolution;
use kinematics::{PlanarFrame, SpatialSolution, TransformReport};
use linear_algebra::Matrix;
use nalgebra::{Point2, Point3};
use std::fmt;
use utilities::{format_fixed, round_to};

const MATRIX_DECIMALS: usize = 3;
const COORDINATE_DECIMALS: u32 = 2;

pub fn format_matrix(matrix: &Matrix) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|v| format_fixed(*v, MATRIX_DECIMALS))
                .collect();
            format!("[{}]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_point2(p: &Point2<f64>) -> String {
    format!(
        "({:.2}, {:.2})",
        round_to(p.x, COORDINATE_DECIMALS),
        round_to(p.y, COORDINATE_DECIMALS)
    )
}

pub fn format_point3(p: &Point3<f64>) -> String {
    format!(
        "({:.2}, {:.2}, {:.2})",
        round_to(p.x, COORDINATE_DECIMALS),
        round_to(p.y, COORDINATE_DECIMALS),
        round_to(p.z, COORDINATE_DECIMALS)
    )
}

fn format_degrees(radians: f64) -> String {
    format!("{:.2} deg", round_to(radians.to_degrees(), COORDINATE_DECIMALS))
}

/// Determinant, rank, inverse, bases and homogeneous transform of one frame.
pub struct ReportPanel<'a>(pub &'a TransformReport);

impl fmt::Display for ReportPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "composed rotation R:")?;
        writeln!(f, "{}", format_matrix(&report.rotation.to_matrix()))?;
        writeln!(f, "det(R) = {}", format_fixed(report.determinant, MATRIX_DECIMALS).trim())?;
        writeln!(f, "rank = {}, nullity = {}", report.rank, report.nullity)?;
        writeln!(
            f,
            "linearly independent: {}",
            if report.linearly_independent { "yes" } else { "no" }
        )?;
        match &report.inverse {
            Some(inverse) => {
                writeln!(f, "inverse R^-1:")?;
                writeln!(f, "{}", format_matrix(inverse))?;
            }
            None => writeln!(f, "inverse: none, the matrix is singular")?,
        }
        if let Some(basis) = report.column_basis_matrix() {
            writeln!(f, "column basis (one vector per row):")?;
            writeln!(f, "{}", format_matrix(&basis))?;
        }
        if let Some(basis) = report.row_basis_matrix() {
            writeln!(f, "row basis:")?;
            writeln!(f, "{}", format_matrix(&basis))?;
        }
        writeln!(f, "homogeneous transform:")?;
        write!(f, "{}", format_matrix(&report.homogeneous.to_matrix()))
    }
}

/// Cumulative angle, rotation and partial coordinate of every planar joint.
pub struct PlanarFramesPanel<'a>(pub &'a [PlanarFrame]);

impl fmt::Display for PlanarFramesPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.0 {
            writeln!(
                f,
                "joint {}: cumulative angle {}",
                frame.joint,
                format_degrees(frame.cumulative_angle)
            )?;
            writeln!(f, "{}", format_matrix(&frame.rotation.to_matrix()))?;
            writeln!(f, "position {}", format_point2(&frame.position))?;
        }
        let end = self
            .0
            .last()
            .map(|frame| frame.position)
            .unwrap_or_else(Point2::origin);
        write!(f, "end effector {}", format_point2(&end))
    }
}

/// The individual yaw, pitch and roll matrices of the fixed spatial arm.
pub struct SpatialAxesPanel<'a>(pub &'a SpatialSolution);

impl fmt::Display for SpatialAxesPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        let labels = ["Rz", "Ry", "Rx"];
        for ((label, rotation), angle) in labels
            .iter()
            .zip(&solution.joint_rotations)
            .zip(solution.angles)
        {
            writeln!(f, "{label}({})", format_degrees(angle))?;
            writeln!(f, "{}", format_matrix(&rotation.to_matrix()))?;
        }
        write!(f, "end effector {}", format_point3(&solution.end_effector()))
    }
}

pub struct ChainPanel<'a>(pub &'a ChainSolution);

impl fmt::Display for ChainPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.pose.points().iter().enumerate() {
            writeln!(f, "p{i} {}", format_point3(p))?;
        }
        write!(f, "end effector {}", format_point3(&self.0.end_effector()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinematics::{JointAngles, LinkSet, SerialChain, planar, spatial};

    #[test]
    fn test_format_matrix() {
        assert_eq!(
            format_matrix(&Matrix::identity(3)),
            "[ 1.000  0.000  0.000]\n[ 0.000  1.000  0.000]\n[ 0.000  0.000  1.000]"
        );
        let m = Matrix::from_rows(&[vec![0.70710678, -0.70710678]]).unwrap();
        assert_eq!(format_matrix(&m), "[ 0.707 -0.707]");
    }

    #[test]
    fn test_negative_zero_is_folded() {
        assert_eq!(format_point2(&Point2::new(-0.0001, 3.0)), "(0.00, 3.00)");
        assert_eq!(format_point3(&Point3::new(1.0, -2.5, -0.0)), "(1.00, -2.50, 0.00)");
    }

    #[test]
    fn test_planar_frames_panel() {
        let links = LinkSet::new(vec![3.0, 2.0, 1.0]).unwrap();
        let angles = JointAngles::from_degrees(&[90.0, 0.0, 0.0]).unwrap();
        let frames = planar::compute_frames(&links, &angles).unwrap();
        let text = PlanarFramesPanel(&frames).to_string();
        assert!(text.starts_with("joint 1: cumulative angle 90.00 deg\n"));
        assert!(text.contains("[ 0.000 -1.000]\n[ 1.000  0.000]"));
        assert!(text.contains("position (0.00, 5.00)"));
        assert!(text.ends_with("end effector (0.00, 6.00)"));
    }

    #[test]
    fn test_empty_planar_panel() {
        assert_eq!(PlanarFramesPanel(&[]).to_string(), "end effector (0.00, 0.00)");
    }

    #[test]
    fn test_report_sections() {
        let links = LinkSet::new(vec![2.5, 2.0, 1.5]).unwrap();
        let angles = JointAngles::zeros(3);
        let report = spatial::analyze_frame(&links, &angles).unwrap();
        let text = ReportPanel(&report).to_string();
        assert!(text.contains("det(R) = 1.000"));
        assert!(text.contains("rank = 3, nullity = 0"));
        assert!(text.contains("linearly independent: yes"));
        assert!(text.contains("inverse R^-1:"));
        assert!(text.ends_with("[ 0.000  0.000  0.000  1.000]"));
        assert!(text.contains("[ 1.000  0.000  0.000  6.000]"));
    }

    #[test]
    fn test_spatial_axes_panel() {
        let links = LinkSet::new(vec![2.5, 2.0, 1.5]).unwrap();
        let angles = JointAngles::from_degrees(&[30.0, 20.0, 10.0]).unwrap();
        let solution = spatial::compute(&links, &angles).unwrap();
        let text = SpatialAxesPanel(&solution).to_string();
        assert!(text.starts_with("Rz(30.00 deg)\n"));
        assert!(text.contains("Ry(20.00 deg)"));
        assert!(text.contains("Rx(10.00 deg)"));
        assert!(text.contains("end effector ("));
    }

    #[test]
    fn test_chain_panel() {
        let links = LinkSet::new(vec![1.0, 2.0]).unwrap();
        let chain = SerialChain::new(links, "zz".parse().unwrap()).unwrap();
        let solution = chain.compute(&JointAngles::zeros(2)).unwrap();
        assert_eq!(
            ChainPanel(&solution).to_string(),
            "p0 (0.00, 0.00, 0.00)\np1 (1.00, 0.00, 0.00)\np2 (3.00, 0.00, 0.00)\nend effector (3.00, 0.00, 0.00)"
        );
    }
}
