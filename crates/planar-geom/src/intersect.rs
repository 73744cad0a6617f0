//! Circle-rectangle intersection tests.
//!
//! Two tests work on rectangles whose edges are parallel to the coordinate axes:
//!
//! * [`intersects_closest_point`] measures the vector from the circle center to
//!   the closest point of the box. It is exact for every relative position and is
//!   the canonical test.
//! * [`intersects_corner_edge`] checks the nearest corner and the two edge bands
//!   separately. It is kept as a baseline; with the circle exactly tangent to an
//!   edge its strict edge comparisons report no contact while the closest point
//!   test reports contact.
//!
//! Rotated rectangles are handled by mapping the circle center into the local
//! frame of the rectangle, where the rectangle is centered at the origin and
//! axis aligned, then running the closest point test.
//!
//! All functions are pure and can be called concurrently.

use planar_linalg::{Mat3F32, Vec2F32};

use crate::pose::transform_point;
use crate::shapes::{Circle, Rectangle};

/// Intersection test for an axis aligned rectangle based on its corners and edges.
///
/// Returns true if any of the following holds:
///
/// * the nearest corner lies within `radius` of the circle center;
/// * the center is within the vertical band of the rectangle and closer than
///   `radius` to a vertical edge;
/// * the center is within the horizontal band and closer than `radius` to a
///   horizontal edge.
///
/// # Arguments
///
/// * `rect_center` - Center of the rectangle.
/// * `half_extents` - Half width and half height of the rectangle.
/// * `circle_center` - Center of the circle.
/// * `radius` - Radius of the circle.
pub fn intersects_corner_edge(
    rect_center: Vec2F32,
    half_extents: Vec2F32,
    circle_center: Vec2F32,
    radius: f32,
) -> bool {
    // distance to the nearest corner, per axis
    let min_x = (rect_center.x + half_extents.x - circle_center.x)
        .abs()
        .min((rect_center.x - half_extents.x - circle_center.x).abs());
    let min_y = (rect_center.y + half_extents.y - circle_center.y)
        .abs()
        .min((rect_center.y - half_extents.y - circle_center.y).abs());
    if min_x * min_x + min_y * min_y <= radius * radius {
        return true;
    }

    // edges
    let len_x = (rect_center.x - circle_center.x).abs();
    let len_y = (rect_center.y - circle_center.y).abs();
    if len_x < half_extents.x + radius && len_y < half_extents.y {
        return true;
    }
    len_y < half_extents.y + radius && len_x < half_extents.x
}

/// Intersection test for an axis aligned rectangle based on the closest point vector.
///
/// The circle center is reflected into the first quadrant of the rectangle,
/// `v = |c - center|`, the excess over the half extents is clamped to zero,
/// `u = max(v - h, 0)`, and the test is `u · u <= radius²`.
///
/// Example:
///
/// ```
/// use planar_geom::intersect::intersects_closest_point;
/// use planar_linalg::Vec2F32;
///
/// let half_extents = Vec2F32::new(2.0, 1.5);
/// assert!(intersects_closest_point(Vec2F32::ZERO, half_extents, Vec2F32::new(2.5, 0.0), 0.6));
/// assert!(!intersects_closest_point(Vec2F32::ZERO, half_extents, Vec2F32::new(3.0, 0.0), 0.6));
/// ```
#[inline]
pub fn intersects_closest_point(
    rect_center: Vec2F32,
    half_extents: Vec2F32,
    circle_center: Vec2F32,
    radius: f32,
) -> bool {
    let v = (circle_center - rect_center).abs();
    let u = (v - half_extents).max(Vec2F32::ZERO);
    u.dot(u) <= radius * radius
}

/// Closest point test for a circle and a rectangle whose world-to-local matrix is known.
///
/// Useful to test many circles against the same rectangle while building the
/// matrix only once.
#[inline]
pub fn intersects_local(world_to_local: &Mat3F32, half_extents: Vec2F32, circle: &Circle) -> bool {
    let local_center = transform_point(world_to_local, circle.center);
    intersects_closest_point(Vec2F32::ZERO, half_extents, local_center, circle.radius)
}

/// Intersection test for a rotated rectangle.
///
/// The circle center is multiplied by the world-to-local matrix of the rectangle.
pub fn intersects_rotated_matrix(rect: &Rectangle, circle: &Circle) -> bool {
    intersects_local(&rect.pose.world_to_local(), rect.half_extents, circle)
}

/// Intersection test for a rotated rectangle.
///
/// The circle center is mapped into the local frame with the rotation written
/// out directly, `(cosθ·dx + sinθ·dy, -sinθ·dx + cosθ·dy)`. Agrees with
/// [`intersects_rotated_matrix`] up to rounding.
pub fn intersects_rotated_trig(rect: &Rectangle, circle: &Circle) -> bool {
    let local_center = rect.pose.to_local(circle.center);
    intersects_closest_point(Vec2F32::ZERO, rect.half_extents, local_center, circle.radius)
}
