#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use planar_linalg as linalg;

#[doc(inline)]
pub use planar_geom as geom;
