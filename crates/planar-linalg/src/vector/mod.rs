//! Vector types module.
//!
//! This module provides the small fixed-size vectors used as matrix rows and
//! columns, points and directions:
//! - Vec2F32: 2D vector
//! - Vec3F32: 3D vector

#[macro_use]
mod vec;

mod vec2;
mod vec3;

pub use vec2::Vec2F32;
pub use vec3::Vec3F32;
