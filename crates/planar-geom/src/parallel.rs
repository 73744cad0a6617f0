use rayon::prelude::*;

use crate::intersect::intersects_local;
use crate::shapes::{Circle, Rectangle};

/// Controls how batch queries are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool, one task per rectangle.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small batches, where the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Tests every circle against every rectangle.
///
/// The world-to-local matrix of each rectangle is built once and reused for
/// all the circles.
///
/// # Returns
///
/// A matrix of results where `result[i][j]` tells whether `rects[i]` and
/// `circles[j]` intersect.
pub fn intersect_many(
    rects: &[Rectangle],
    circles: &[Circle],
    strategy: ExecutionStrategy,
) -> Vec<Vec<bool>> {
    log::debug!(
        "testing {} rectangles against {} circles ({:?})",
        rects.len(),
        circles.len(),
        strategy
    );

    let test_rect = |rect: &Rectangle| {
        let world_to_local = rect.pose.world_to_local();
        circles
            .iter()
            .map(|circle| intersects_local(&world_to_local, rect.half_extents, circle))
            .collect::<Vec<_>>()
    };

    match strategy {
        ExecutionStrategy::Parallel => rects.par_iter().map(test_rect).collect(),
        ExecutionStrategy::Serial => rects.iter().map(test_rect).collect(),
    }
}

/// Whether any of the circles intersects the rectangle.
pub fn any_intersection(rect: &Rectangle, circles: &[Circle], strategy: ExecutionStrategy) -> bool {
    let world_to_local = rect.pose.world_to_local();
    let test = |circle: &Circle| intersects_local(&world_to_local, rect.half_extents, circle);

    match strategy {
        ExecutionStrategy::Parallel => circles.par_iter().any(test),
        ExecutionStrategy::Serial => circles.iter().any(test),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::RigidPose2D;
    use planar_linalg::Vec2F32;
    use rand::Rng;

    fn random_scene(num_rects: usize, num_circles: usize) -> (Vec<Rectangle>, Vec<Circle>) {
        let mut rng = rand::rng();
        let rects = (0..num_rects)
            .map(|_| {
                Rectangle::from_size(
                    Vec2F32::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)),
                    rng.random_range(0.5..5.0),
                    rng.random_range(0.5..5.0),
                    rng.random_range(0.0..360.0),
                )
            })
            .collect();
        let circles = (0..num_circles)
            .map(|_| {
                Circle::new(
                    Vec2F32::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)),
                    rng.random_range(0.1..2.0),
                )
            })
            .collect();
        (rects, circles)
    }

    #[test]
    fn test_intersect_many_shape() {
        let (rects, circles) = random_scene(7, 13);
        let result = intersect_many(&rects, &circles, ExecutionStrategy::Parallel);
        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|row| row.len() == 13));
    }

    #[test]
    fn test_intersect_many_parallel_matches_serial() {
        let (rects, circles) = random_scene(32, 64);
        let parallel = intersect_many(&rects, &circles, ExecutionStrategy::Parallel);
        let serial = intersect_many(&rects, &circles, ExecutionStrategy::Serial);
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_intersect_many_matches_single_query() {
        let (rects, circles) = random_scene(8, 16);
        let result = intersect_many(&rects, &circles, ExecutionStrategy::Serial);
        for (i, rect) in rects.iter().enumerate() {
            for (j, circle) in circles.iter().enumerate() {
                assert_eq!(result[i][j], rect.intersects(circle));
            }
        }
    }

    #[test]
    fn test_any_intersection() {
        let rect = Rectangle::new(RigidPose2D::new(Vec2F32::ZERO, 45.0), Vec2F32::new(2.0, 1.0));
        let misses = vec![
            Circle::new(Vec2F32::new(10.0, 0.0), 1.0),
            Circle::new(Vec2F32::new(0.0, -10.0), 1.0),
        ];
        assert!(!any_intersection(&rect, &misses, ExecutionStrategy::Parallel));
        assert!(!any_intersection(&rect, &misses, ExecutionStrategy::Serial));

        let mut hits = misses.clone();
        hits.push(Circle::new(Vec2F32::new(0.0, 2.121), 0.5));
        assert!(any_intersection(&rect, &hits, ExecutionStrategy::Parallel));
        assert!(any_intersection(&rect, &hits, ExecutionStrategy::Serial));
        assert!(!any_intersection(&rect, &[], ExecutionStrategy::Parallel));
    }
}
