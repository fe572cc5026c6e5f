use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use utilities::format_number;

/// A dynamically sized column vector.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector(pub(crate) DVector<f64>);

impl Vector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(DVector::from_vec(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<DVector<f64>> for Vector {
    fn from(value: DVector<f64>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{} ", self.len())?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.0.iter().map(|v| format_number(*v)).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_display() {
        let v = Vector::new(vec![1.0, -2.0, 0.5]);
        assert_eq!(v.to_string(), "[1, -2, 0.5]");
        assert_eq!(format!("{v:?}"), "Vector3 [1, -2, 0.5]");
    }

    #[test]
    fn test_vector_index_and_len() {
        let v = Vector::from(DVector::from_vec(vec![4.0, 5.0]));
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
        assert_eq!(v[1], 5.0);
        assert_eq!(v.to_vec(), vec![4.0, 5.0]);
    }
}
