//! Matrix types module.
//!
//! This module provides the 3x3 single precision matrix used both as a linear
//! map on 3-vectors and, with the homogeneous convention, as an affine map on
//! 2D points.

mod mat3;

pub use mat3::Mat3F32;
