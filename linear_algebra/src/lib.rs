pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use thiserror::Error;

pub mod prelude {
    pub use crate::matrix::*;
    pub use crate::vector::*;
    pub use crate::LinearAlgebraErrors;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinearAlgebraErrors {
    #[error("dimension mismatch in {operation}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("rows have different lengths")]
    RaggedRows,
    #[error("matrix is singular (determinant {determinant:e})")]
    SingularMatrix { determinant: f64 },
}
