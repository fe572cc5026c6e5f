//! Homogeneous transforms embedding a rotation and a translation in one
//! matrix acting on augmented coordinates.
//!
//! We use the terminology `parent_from_child`: a point expressed in the
//! child frame is mapped into the parent frame by `parent_from_child * p`,
//! so chains compose right to left like the matrices they wrap.

pub mod planar;
pub mod spatial;

pub use planar::Transform2;
pub use spatial::Transform3;
