use planar_linalg::Vec2F32;

use crate::intersect;
use crate::pose::RigidPose2D;

/// Circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Center of the circle in world coordinates.
    pub center: Vec2F32,
    /// Radius of the circle, expected to be non-negative.
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Vec2F32, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Rectangle, axis aligned in its own local frame and centered at the frame origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// Placement of the rectangle frame in world space.
    pub pose: RigidPose2D,
    /// Half width and half height, expected to be non-negative.
    pub half_extents: Vec2F32,
}

impl Rectangle {
    /// Create a new rectangle from its pose and half extents.
    pub fn new(pose: RigidPose2D, half_extents: Vec2F32) -> Self {
        Self { pose, half_extents }
    }

    /// Create a rectangle from its center, full width and height and rotation in degrees.
    pub fn from_size(center: Vec2F32, width: f32, height: f32, rotation_degrees: f32) -> Self {
        Self {
            pose: RigidPose2D::new(center, rotation_degrees),
            half_extents: Vec2F32::new(width * 0.5, height * 0.5),
        }
    }

    /// Center of the rectangle in world coordinates.
    #[inline]
    pub fn center(&self) -> Vec2F32 {
        self.pose.position
    }

    /// Full width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    /// Full height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    /// Corners in world coordinates, counter-clockwise starting at the local `(+x, +y)` corner.
    pub fn corners(&self) -> [Vec2F32; 4] {
        let Vec2F32 { x: hx, y: hy } = self.half_extents;
        [
            Vec2F32::new(hx, hy),
            Vec2F32::new(-hx, hy),
            Vec2F32::new(-hx, -hy),
            Vec2F32::new(hx, -hy),
        ]
        .map(|corner| self.pose.to_world(corner))
    }

    /// Whether the circle touches or overlaps the rectangle.
    ///
    /// This is the canonical test, see [`intersect::intersects_rotated_matrix`].
    #[inline]
    pub fn intersects(&self, circle: &Circle) -> bool {
        intersect::intersects_rotated_matrix(self, circle)
    }
}
