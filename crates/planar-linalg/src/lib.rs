#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
mod matrix;
mod vector;

/// Singular Value Decomposition of tall or square matrices.
pub mod svd;

pub use error::LinalgError;
pub use matrix::Mat3F32;
pub use svd::Svd3;
pub use vector::{Vec2F32, Vec3F32};
