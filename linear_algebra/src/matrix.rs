use crate::{LinearAlgebraErrors, Vector};
use nalgebra::{DMatrix, Matrix2, Matrix3, Matrix4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tolerance::SINGULAR_EPSILON;
use utilities::format_number;

/// A dynamically sized, row/column indexed matrix.
///
/// Every product checks the operand shapes and reports a
/// `DimensionMismatch` instead of broadcasting.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix(pub(crate) DMatrix<f64>);

impl Matrix {
    /// Builds a matrix from a list of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinearAlgebraErrors> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(LinearAlgebraErrors::EmptyMatrix);
        }
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(LinearAlgebraErrors::RaggedRows);
        }
        Ok(Self(DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j])))
    }

    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self(DMatrix::zeros(nrows, ncols))
    }

    pub fn nrows(&self) -> usize {
        self.0.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.0.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn row(&self, i: usize) -> Vector {
        Vector::new(self.0.row(i).iter().copied().collect())
    }

    pub fn column(&self, j: usize) -> Vector {
        Vector::new(self.0.column(j).iter().copied().collect())
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.nrows()).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Matrix-matrix product `self * rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, LinearAlgebraErrors> {
        if self.ncols() != rhs.nrows() {
            return Err(LinearAlgebraErrors::DimensionMismatch {
                operation: "matmul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self(&self.0 * &rhs.0))
    }

    /// Matrix-vector product `self * v`.
    pub fn matvec(&self, v: &Vector) -> Result<Vector, LinearAlgebraErrors> {
        if self.ncols() != v.len() {
            return Err(LinearAlgebraErrors::DimensionMismatch {
                operation: "matvec",
                lhs: self.shape(),
                rhs: (v.len(), 1),
            });
        }
        Ok(Vector::from(&self.0 * &v.0))
    }

    pub fn determinant(&self) -> Result<f64, LinearAlgebraErrors> {
        self.require_square("determinant")?;
        Ok(self.0.determinant())
    }

    /// Inverse of a square matrix. Fails with `SingularMatrix` when the
    /// determinant is within `SINGULAR_EPSILON` of zero.
    pub fn inverse(&self) -> Result<Matrix, LinearAlgebraErrors> {
        let determinant = self.determinant()?;
        if determinant.abs() < SINGULAR_EPSILON {
            return Err(LinearAlgebraErrors::SingularMatrix { determinant });
        }
        self.0
            .clone()
            .try_inverse()
            .map(Self)
            .ok_or(LinearAlgebraErrors::SingularMatrix { determinant })
    }

    /// Reduced row echelon form together with the pivot column indices.
    /// Entries with magnitude at or below `tol` are treated as zero.
    pub fn rref(&self, tol: f64) -> (Matrix, Vec<usize>) {
        let mut m = self.0.clone();
        let (nrows, ncols) = m.shape();
        let mut pivots = Vec::new();
        let mut row = 0;

        for col in 0..ncols {
            if row >= nrows {
                break;
            }

            // partial pivoting
            let (pivot_row, pivot_abs) = (row..nrows)
                .map(|i| (i, m[(i, col)].abs()))
                .fold((row, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            if pivot_abs <= tol {
                continue;
            }
            m.swap_rows(row, pivot_row);

            let pivot = m[(row, col)];
            for j in 0..ncols {
                m[(row, j)] /= pivot;
            }
            for i in 0..nrows {
                if i == row {
                    continue;
                }
                let factor = m[(i, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..ncols {
                    let v = m[(row, j)];
                    m[(i, j)] -= factor * v;
                }
            }

            pivots.push(col);
            row += 1;
        }

        (Self(m), pivots)
    }

    pub fn rank(&self, tol: f64) -> usize {
        self.rref(tol).1.len()
    }

    /// Dimension of the null space, `ncols - rank`.
    pub fn nullity(&self, tol: f64) -> usize {
        self.ncols() - self.rank(tol)
    }

    /// Linearly independent columns of the matrix, taken from the pivot
    /// columns of the reduced row echelon form.
    pub fn column_basis(&self, tol: f64) -> Vec<Vector> {
        let (_, pivots) = self.rref(tol);
        pivots.into_iter().map(|j| self.column(j)).collect()
    }

    /// Linearly independent rows of the matrix.
    pub fn row_basis(&self, tol: f64) -> Vec<Vector> {
        let (_, pivots) = self.transpose().rref(tol);
        pivots.into_iter().map(|i| self.row(i)).collect()
    }

    /// Largest absolute element-wise difference, or `None` on shape mismatch.
    pub fn max_abs_diff(&self, rhs: &Matrix) -> Option<f64> {
        if self.shape() != rhs.shape() {
            return None;
        }
        Some(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs())),
        )
    }

    /// True when `self * self^T` is within `tol` of the identity.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let product = Self(&self.0 * self.0.transpose());
        product
            .max_abs_diff(&Matrix::identity(self.nrows()))
            .is_some_and(|d| d < tol)
    }

    fn require_square(&self, operation: &'static str) -> Result<(), LinearAlgebraErrors> {
        if self.nrows() == 0 {
            return Err(LinearAlgebraErrors::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(LinearAlgebraErrors::NotSquare {
                operation,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl From<DMatrix<f64>> for Matrix {
    fn from(value: DMatrix<f64>) -> Self {
        Self(value)
    }
}

impl From<Matrix2<f64>> for Matrix {
    fn from(value: Matrix2<f64>) -> Self {
        Self(DMatrix::from_fn(2, 2, |i, j| value[(i, j)]))
    }
}

impl From<Matrix3<f64>> for Matrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(DMatrix::from_fn(3, 3, |i, j| value[(i, j)]))
    }
}

impl From<Matrix4<f64>> for Matrix {
    fn from(value: Matrix4<f64>) -> Self {
        Self(DMatrix::from_fn(4, 4, |i, j| value[(i, j)]))
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix{}x{} ", self.nrows(), self.ncols())?;
        for i in 0..self.nrows() {
            let row: Vec<String> = self.0.row(i).iter().map(|v| format_number(*v)).collect();
            writeln!(f, "   {}", row.join("   "))?;
        }
        Ok(())
    }
}
