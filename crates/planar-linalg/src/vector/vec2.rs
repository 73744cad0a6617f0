//! 2D vector (single precision).
define_vector_type!(
    /// 2D vector used for points, half-extents and directions in the plane.
    Vec2F32,
    glam::Vec2,
    f32,
    [f32; 2],
    [x, y]
);
