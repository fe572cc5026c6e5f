/// Threshold below which a determinant is treated as zero.
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Absolute and relative tolerances used for floating point comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    abs_tol: f64,
    rel_tol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs_tol: 1e-9,
            rel_tol: 1e-9,
        }
    }
}

impl Tolerances {
    pub fn new(rel_tol: f64, abs_tol: f64) -> Self {
        Self { rel_tol, abs_tol }
    }

    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    pub fn check_error(&self, x0: f64, xf: f64) -> bool {
        check_error(x0, xf, self.rel_tol, self.abs_tol)
    }

    /// Element-wise comparison of two equally sized slices.
    /// Slices of different length never match.
    pub fn check_slices(&self, x0: &[f64], xf: &[f64]) -> bool {
        x0.len() == xf.len()
            && x0
                .iter()
                .zip(xf)
                .all(|(a, b)| self.check_error(*a, *b))
    }
}

pub fn check_error(x0: f64, xf: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if !x0.is_finite() || !xf.is_finite() {
        return false;
    }
    let abs_diff = (xf - x0).abs();
    let rel_diff = if x0.abs() > 1e-10 {
        abs_diff / x0.abs()
    } else {
        0.0
    };
    abs_diff <= abs_tol || (x0.abs() > 1e-10 && rel_diff <= rel_tol)
}
