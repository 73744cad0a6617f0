//! 3D vector (single precision).
define_vector_type!(
    /// 3D vector used as matrix row, column or homogeneous 2D point.
    Vec3F32,
    glam::Vec3,
    f32,
    [f32; 3],
    [x, y, z]
);

impl Vec3F32 {
    /// Vector with all components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
}
