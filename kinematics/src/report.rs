use linear_algebra::{Matrix, Vector};
use nalgebra::Point3;
use rotations::RotationMatrix;
use tolerance::{SINGULAR_EPSILON, Tolerances};
use transforms::Transform3;

/// Linear algebra diagnostics of a composed rotation and the position it
/// is applied at. A read-only snapshot, recomputed on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    pub rotation: RotationMatrix,
    pub determinant: f64,
    pub rank: usize,
    /// `3 - rank`
    pub nullity: usize,
    /// True when the columns are linearly independent (`rank == 3`).
    pub linearly_independent: bool,
    /// False when `|det| < SINGULAR_EPSILON`; `inverse` is then `None`.
    pub invertible: bool,
    pub inverse: Option<Matrix>,
    /// Independent columns, one per row; equals `R^T` for a rotation.
    pub column_basis: Vec<Vector>,
    /// Independent rows; equals `R` for a rotation.
    pub row_basis: Vec<Vector>,
    /// `[[R, p], [0, 0, 0, 1]]`
    pub homogeneous: Transform3,
}

impl TransformReport {
    /// The column basis stacked as rows.
    pub fn column_basis_matrix(&self) -> Option<Matrix> {
        stack_rows(&self.column_basis)
    }

    pub fn row_basis_matrix(&self) -> Option<Matrix> {
        stack_rows(&self.row_basis)
    }

    /// The translation column of the homogeneous transform.
    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.homogeneous.translation_part())
    }
}

fn stack_rows(vectors: &[Vector]) -> Option<Matrix> {
    let rows: Vec<Vec<f64>> = vectors.iter().map(|v| v.to_vec()).collect();
    Matrix::from_rows(&rows).ok()
}

pub fn analyze_transform(rotation: &RotationMatrix, position: &Point3<f64>) -> TransformReport {
    analyze_transform_with(rotation, position, &Tolerances::default())
}

/// Computes the report with an explicit tolerance for rank decisions.
pub fn analyze_transform_with(
    rotation: &RotationMatrix,
    position: &Point3<f64>,
    tolerances: &Tolerances,
) -> TransformReport {
    let matrix = rotation.to_matrix();
    let determinant = rotation.determinant();

    // singular input is reported through the flag, never as NaN entries
    let inverse = if determinant.abs() < SINGULAR_EPSILON {
        None
    } else {
        matrix.inverse().ok()
    };

    let tol = tolerances.abs_tol();
    let rank = matrix.rank(tol);
    let nullity = matrix.ncols() - rank;

    TransformReport {
        rotation: *rotation,
        determinant,
        rank,
        nullity,
        linearly_independent: rank == matrix.ncols(),
        invertible: inverse.is_some(),
        inverse,
        column_basis: matrix.column_basis(tol),
        row_basis: matrix.row_basis(tol),
        homogeneous: Transform3::from_parts(*rotation, position.coords),
    }
}
