use planar_linalg::{Mat3F32, Vec2F32, Vec3F32};

/// Placement of a local 2D frame in world space.
///
/// The frame is first rotated by `rotation_degrees` (counter-clockwise) and
/// then translated to `position`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidPose2D {
    /// Origin of the local frame in world coordinates.
    pub position: Vec2F32,
    /// Rotation of the local frame in degrees.
    pub rotation_degrees: f32,
}

impl RigidPose2D {
    /// The world frame itself.
    pub const IDENTITY: Self = Self {
        position: Vec2F32::ZERO,
        rotation_degrees: 0.0,
    };

    /// Create a new pose from a position and a rotation in degrees.
    pub fn new(position: Vec2F32, rotation_degrees: f32) -> Self {
        Self {
            position,
            rotation_degrees,
        }
    }

    /// Rotation of the local frame in radians.
    #[inline]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Homogeneous local-to-world matrix.
    ///
    /// ```text
    /// [cosθ, -sinθ, px]
    /// [sinθ,  cosθ, py]
    /// [   0,     0,  1]
    /// ```
    pub fn local_to_world(&self) -> Mat3F32 {
        let (sin, cos) = self.rotation_radians().sin_cos();
        Mat3F32::from_rows(
            Vec3F32::new(cos, -sin, self.position.x),
            Vec3F32::new(sin, cos, self.position.y),
            Vec3F32::new(0.0, 0.0, 1.0),
        )
    }

    /// Homogeneous world-to-local matrix, obtained by inverting [`RigidPose2D::local_to_world`].
    ///
    /// A rotation always has a non-zero determinant, so the inversion only fails
    /// on degenerate input; the closed form is used in that case.
    pub fn world_to_local(&self) -> Mat3F32 {
        match self.local_to_world().inverse() {
            Ok(m) => m,
            Err(err) => {
                log::warn!(
                    "cannot invert the local to world matrix of {:?}: {}",
                    self,
                    err
                );
                self.world_to_local_closed_form()
            }
        }
    }

    /// Homogeneous world-to-local matrix from the closed form `[Rᵀ | -Rᵀp]`.
    pub fn world_to_local_closed_form(&self) -> Mat3F32 {
        let (sin, cos) = self.rotation_radians().sin_cos();
        let Vec2F32 { x: px, y: py } = self.position;
        Mat3F32::from_rows(
            Vec3F32::new(cos, sin, -(cos * px + sin * py)),
            Vec3F32::new(-sin, cos, sin * px - cos * py),
            Vec3F32::new(0.0, 0.0, 1.0),
        )
    }

    /// Maps a world point into the local frame by direct trigonometric substitution.
    ///
    /// Equivalent to `transform_point(&self.world_to_local(), point)`.
    pub fn to_local(&self, point: Vec2F32) -> Vec2F32 {
        let (sin, cos) = self.rotation_radians().sin_cos();
        let d = point - self.position;
        Vec2F32::new(cos * d.x + sin * d.y, -sin * d.x + cos * d.y)
    }

    /// Maps a local point into world space.
    pub fn to_world(&self, point: Vec2F32) -> Vec2F32 {
        let (sin, cos) = self.rotation_radians().sin_cos();
        Vec2F32::new(
            cos * point.x - sin * point.y + self.position.x,
            sin * point.x + cos * point.y + self.position.y,
        )
    }
}

/// Builds the world-to-local matrix of a pose.
///
/// The local-to-world matrix is built first and then inverted.
///
/// Example:
///
/// ```
/// use planar_geom::{transform_point, world_to_local, RigidPose2D};
/// use planar_linalg::Vec2F32;
///
/// let pose = RigidPose2D::new(Vec2F32::new(1.0, 2.0), 0.0);
/// let local = transform_point(&world_to_local(&pose), Vec2F32::new(1.0, 2.0));
/// assert_eq!(local, Vec2F32::ZERO);
/// ```
pub fn world_to_local(pose: &RigidPose2D) -> Mat3F32 {
    pose.world_to_local()
}

/// Applies a homogeneous 2D affine matrix to a point `(x, y, 1)`.
///
/// Only the first two rows are used, the matrix is assumed to be affine.
pub fn transform_point(m: &Mat3F32, point: Vec2F32) -> Vec2F32 {
    let p = *m * Vec3F32::new(point.x, point.y, 1.0);
    Vec2F32::new(p.x, p.y)
}
